//! Store configuration.
//!
//! Defaults mirror the shipped app: the `student_tasks` storage key, the
//! four-course catalog offered by the add-task form, and new tasks starting
//! at zero progress.

/// Fixed key the task collection is mirrored under in the key-value area.
pub const DEFAULT_STORAGE_KEY: &str = "student_tasks";

/// Course names offered to the user.
pub const DEFAULT_COURSES: [&str; 4] = ["Mathematics", "English", "Physics", "Chemistry"];

/// Configuration for a [`TaskStore`](crate::TaskStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key-value storage key holding the serialized task collection.
    pub storage_key: String,
    /// Allowed course names; `create` rejects tasks outside this catalog.
    pub courses: Vec<String>,
    /// Progress assigned when a creation request omits it.
    pub default_progress: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            courses: DEFAULT_COURSES.iter().map(|name| name.to_string()).collect(),
            default_progress: 0,
        }
    }
}

impl StoreConfig {
    /// Returns whether `course` is part of the configured catalog.
    pub fn has_course(&self, course: &str) -> bool {
        self.courses.iter().any(|known| known == course)
    }
}
