//! Domain model for student tasks.
//!
//! # Responsibility
//! - Define the canonical task record persisted and projected by core.
//! - Enforce field-level invariants at creation time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `progress` stays within `0..=100` on every write path.

pub mod task;
