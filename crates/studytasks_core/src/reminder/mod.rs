//! Deadline reminder scheduling.
//!
//! # Responsibility
//! - Derive one-shot notification triggers from task deadlines.
//! - Abstract the device notification facility behind a backend seam.
//!
//! # Invariants
//! - Scheduling is fire-and-forget: failures are logged and surface as
//!   `None`, never as an error that could block task creation.

pub mod center;
pub mod scheduler;
