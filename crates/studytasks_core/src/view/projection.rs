//! Filtered, sorted projections of the task collection.
//!
//! # Responsibility
//! - Compute the ordered sequence the presentation layer renders.
//!
//! # Invariants
//! - `project` is pure and side-effect free; the input slice is untouched.
//! - Sorting is stable: equal-key tasks keep their relative input order.

use crate::model::task::{Priority, Task};

/// Which tasks pass into the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every task passes.
    All,
    /// Only tasks with exactly this priority pass.
    Only(Priority),
}

/// Sort key for the projected sequence. All orders are ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Calendar-date order; ties keep input order.
    Deadline,
    /// Lexicographic order of the priority label text, so High < Low <
    /// Medium. This is the shipped behavior; callers needing severity order
    /// (High before Medium before Low) must not use this key for that.
    Priority,
    /// Numeric order of `progress`.
    Progress,
}

/// Derives a new, filtered and sorted sequence from `tasks`.
///
/// Calling this twice with identical arguments on an unmodified collection
/// yields identical output.
pub fn project(tasks: &[Task], filter: PriorityFilter, sort_by: SortKey) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| match filter {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => task.priority == priority,
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, which the tie-break contract relies on.
    match sort_by {
        // ISO YYYY-MM-DD strings order lexicographically as calendar dates.
        SortKey::Deadline => view.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        SortKey::Priority => view.sort_by(|a, b| a.priority.label().cmp(b.priority.label())),
        SortKey::Progress => view.sort_by(|a, b| a.progress.cmp(&b.progress)),
    }

    view
}
