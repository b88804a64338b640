//! Core domain logic for the studytasks student task manager.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{StoreConfig, DEFAULT_COURSES, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, TaskValidationError, MAX_PROGRESS};
pub use reminder::center::InProcessNotificationCenter;
pub use reminder::scheduler::{
    NotificationBackend, OneShotNotification, ReminderHandle, ReminderScheduler,
    SchedulingError, REMINDER_HOUR,
};
pub use storage::{
    open_store, open_store_in_memory, KeyValueStorage, SqliteKeyValueStorage, StorageError,
    StorageResult,
};
pub use store::task_store::{NewTask, TaskStore};
pub use view::projection::{project, PriorityFilter, SortKey};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
