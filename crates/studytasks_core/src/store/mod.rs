//! Authoritative task collection ownership.
//!
//! # Responsibility
//! - Mediate every read and write of the task collection.
//! - Keep the in-memory collection and its durable mirror consistent.
//!
//! # Invariants
//! - Exactly one task per `id` at any time.
//! - Every mutation rewrites the full collection to the durable mirror.

pub mod task_store;
