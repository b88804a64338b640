//! Task store: in-memory collection plus durable JSON mirror.
//!
//! # Responsibility
//! - Sole owner of the authoritative task collection.
//! - Serialize the full collection to the key-value area on every mutation.
//!
//! # Invariants
//! - `id` uniqueness is enforced at creation.
//! - Validation failures are rejected before any mutation.
//! - Persistence failures are logged and never roll back the in-memory
//!   mutation; memory stays authoritative for the session.

use crate::config::StoreConfig;
use crate::model::task::{Priority, Task, TaskId, TaskValidationError, MAX_PROGRESS};
use crate::storage::KeyValueStorage;
use log::{error, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creation request for a task.
///
/// `id` and `progress` are optional: the store assigns a fresh id and the
/// configured default progress when they are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub id: Option<TaskId>,
    pub title: String,
    pub course: String,
    pub deadline: String,
    pub priority: Priority,
    pub progress: Option<u8>,
}

impl NewTask {
    /// Convenience constructor for the common form-submission shape.
    pub fn new(
        title: impl Into<String>,
        course: impl Into<String>,
        deadline: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            course: course.into(),
            deadline: deadline.into(),
            priority,
            progress: None,
        }
    }
}

/// Owner of the authoritative task collection and its durable mirror.
///
/// All collection access goes through this type; callers hold `&[Task]`
/// views, never the collection itself.
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    tasks: Vec<Task>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Creates a store over the given key-value area.
    ///
    /// The collection starts empty; call [`load`](Self::load) to hydrate it
    /// from the durable mirror.
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            tasks: Vec::new(),
        }
    }

    /// Read-only view of the current collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Hydrates the collection from the durable mirror.
    ///
    /// An absent key seeds an empty collection and persists it, so a later
    /// read can distinguish "initialized empty" from "missing". Read or
    /// parse failures are logged and leave the last in-memory state
    /// authoritative; this never raises.
    pub fn load(&mut self) -> &[Task] {
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => {
                    info!(
                        "event=tasks_load module=store status=ok task_count={}",
                        tasks.len()
                    );
                    self.tasks = tasks;
                }
                Err(err) => {
                    error!(
                        "event=tasks_load module=store status=error error_code=parse_failed error={err}"
                    );
                }
            },
            Ok(None) => {
                info!("event=tasks_load module=store status=ok seeded=true task_count=0");
                self.tasks.clear();
                self.persist("load");
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=store status=error error_code=read_failed error={err}"
                );
            }
        }
        &self.tasks
    }

    /// Validates and appends a task, then persists the collection.
    ///
    /// Assigns a fresh id when the request omits one and defaults `progress`
    /// to the configured value when absent.
    ///
    /// # Errors
    /// Validation errors only; persistence failure is logged, not returned.
    pub fn create(&mut self, request: NewTask) -> Result<Task, TaskValidationError> {
        let id = match request.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                if self.tasks.iter().any(|task| task.id == id) {
                    return Err(TaskValidationError::DuplicateId(id));
                }
                id
            }
            None => self.generate_id(),
        };

        let task = Task {
            id,
            title: request.title,
            course: request.course,
            deadline: request.deadline,
            priority: request.priority,
            progress: request.progress.unwrap_or(self.config.default_progress),
        };

        task.validate()?;
        if !self.config.has_course(&task.course) {
            return Err(TaskValidationError::UnknownCourse(task.course));
        }

        info!(
            "event=task_create module=store status=ok task_id={} priority={} deadline={}",
            task.id, task.priority, task.deadline
        );
        self.tasks.push(task.clone());
        self.persist("create");
        Ok(task)
    }

    /// Replaces only the `progress` field of the task with `id`.
    ///
    /// An unknown id is a logged no-op, not an error; out-of-range progress
    /// is rejected before any mutation.
    pub fn update_progress(
        &mut self,
        id: &str,
        progress: u8,
    ) -> Result<(), TaskValidationError> {
        if progress > MAX_PROGRESS {
            return Err(TaskValidationError::ProgressOutOfRange(progress));
        }

        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.progress = progress;
                info!(
                    "event=task_update_progress module=store status=ok task_id={id} progress={progress}"
                );
                self.persist("update_progress");
            }
            None => {
                warn!(
                    "event=task_update_progress module=store status=missing task_id={id}"
                );
            }
        }
        Ok(())
    }

    /// Marks the task with `id` fully done.
    pub fn complete(&mut self, id: &str) -> Result<(), TaskValidationError> {
        self.update_progress(id, MAX_PROGRESS)
    }

    /// Removes the task with `id`; silent no-op when absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() < before {
            info!("event=task_delete module=store status=ok task_id={id}");
        } else {
            info!("event=task_delete module=store status=missing task_id={id}");
        }
        self.persist("delete");
    }

    /// Empties the collection.
    pub fn delete_all(&mut self) {
        info!(
            "event=tasks_clear module=store status=ok task_count={}",
            self.tasks.len()
        );
        self.tasks.clear();
        self.persist("delete_all");
    }

    fn persist(&mut self, operation: &str) {
        let payload = match serde_json::to_string(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=tasks_persist module=store status=error operation={operation} error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.storage.put(&self.config.storage_key, &payload) {
            error!(
                "event=tasks_persist module=store status=error operation={operation} task_count={} error={err}",
                self.tasks.len()
            );
        }
    }

    // Time-based decimal millisecond id, bumped until unique so rapid
    // same-millisecond creates still get distinct ids.
    fn generate_id(&self) -> TaskId {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        loop {
            let candidate = millis.to_string();
            if !self.tasks.iter().any(|task| task.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}
