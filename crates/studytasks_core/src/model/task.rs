//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, projection and
//!   reminder scheduling.
//! - Provide creation-time validation of field invariants.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `deadline` is a calendar date serialized as `YYYY-MM-DD`.
//! - `progress` is a percentage within `0..=100`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

/// Maximum value of the `progress` percentage.
pub const MAX_PROGRESS: u8 = 100;

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Urgency level of a task.
///
/// Wire labels are the literal variant names (`"High"`, `"Medium"`, `"Low"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display/wire label for this priority.
    ///
    /// The projection's priority sort compares these labels as text, so the
    /// label is part of the observable contract, not just presentation.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation error for task field invariants.
///
/// These are the only errors that must reach callers synchronously; all
/// other store-side failures are absorbed and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `course` is empty or whitespace-only.
    EmptyCourse,
    /// `course` is not part of the configured course catalog.
    UnknownCourse(String),
    /// `deadline` is not a `YYYY-MM-DD` calendar date.
    InvalidDeadline(String),
    /// `progress` exceeds 100.
    ProgressOutOfRange(u8),
    /// A caller-supplied `id` already exists in the store.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyCourse => write!(f, "task course must not be empty"),
            Self::UnknownCourse(course) => {
                write!(f, "course `{course}` is not in the course catalog")
            }
            Self::InvalidDeadline(deadline) => {
                write!(f, "deadline `{deadline}` is not a YYYY-MM-DD date")
            }
            Self::ProgressOutOfRange(progress) => {
                write!(f, "progress {progress} is outside 0..=100")
            }
            Self::DuplicateId(id) => write!(f, "task id already exists: {id}"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Serialized field names (`id`, `title`, `course`, `deadline`, `priority`,
/// `progress`) are the durable storage schema and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable lookup/delete key, assigned at creation.
    pub id: TaskId,
    /// Short description of the work item.
    pub title: String,
    /// Course name from the configured catalog.
    pub course: String,
    /// Due date as an ISO `YYYY-MM-DD` string; no time component persisted.
    pub deadline: String,
    /// Urgency level.
    pub priority: Priority,
    /// Completion percentage in `0..=100`; mutable after creation and not
    /// required to be monotonic.
    pub progress: u8,
}

impl Task {
    /// Checks field-level invariants.
    ///
    /// Course-catalog membership is a store concern (the catalog lives in
    /// config) and is checked there, not here.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyCourse` when the trimmed field is empty.
    /// - `InvalidDeadline` when `deadline` does not parse as a date.
    /// - `ProgressOutOfRange` when `progress > 100`.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.course.trim().is_empty() {
            return Err(TaskValidationError::EmptyCourse);
        }
        if parse_deadline(&self.deadline).is_none() {
            return Err(TaskValidationError::InvalidDeadline(self.deadline.clone()));
        }
        if self.progress > MAX_PROGRESS {
            return Err(TaskValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }

    /// Returns the deadline as a calendar date, or `None` when the persisted
    /// string is not a valid date.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_deadline(&self.deadline)
    }

    /// Returns whether this task is fully done.
    pub fn is_complete(&self) -> bool {
        self.progress == MAX_PROGRESS
    }
}

fn parse_deadline(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DEADLINE_FORMAT).ok()
}
