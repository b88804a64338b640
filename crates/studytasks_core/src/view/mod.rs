//! Read-only view derivation.
//!
//! # Responsibility
//! - Derive display-ready orderings of the task collection.
//!
//! # Invariants
//! - Derivations are pure; the input collection is never mutated.

pub mod projection;
