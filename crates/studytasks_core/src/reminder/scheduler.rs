//! Reminder scheduler and notification backend contract.
//!
//! # Responsibility
//! - Derive the trigger instant (deadline date at the fixed local hour).
//! - Gate scheduling behind an idempotent permission request.
//!
//! # Invariants
//! - `request_permission` must run before the first schedule call; the
//!   backend answer is cached for the session.
//! - Scheduling and cancellation never propagate errors to the caller.

use crate::model::task::Task;
use chrono::{DateTime, Local, LocalResult, TimeZone};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Local time-of-day reminders fire at, on the deadline date.
pub const REMINDER_HOUR: u32 = 9;

const REMINDER_TITLE: &str = "📅 Task Deadline Reminder";

/// Opaque handle to a scheduled notification, used only for cancellation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderHandle(Uuid);

impl ReminderHandle {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ReminderHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single future local notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotNotification {
    pub title: String,
    pub body: String,
    pub trigger_at: DateTime<Local>,
}

/// Backend-side registration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The notification facility refused the registration.
    Rejected(String),
}

impl Display for SchedulingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "notification registration rejected: {reason}"),
        }
    }
}

impl Error for SchedulingError {}

/// Seam to the device notification facility.
pub trait NotificationBackend {
    /// Asks the facility for notification permission. Idempotent.
    fn request_permission(&mut self) -> bool;

    /// Registers a one-shot notification and returns its handle.
    fn register(&mut self, notification: OneShotNotification)
        -> Result<ReminderHandle, SchedulingError>;

    /// Best-effort cancellation; no-op for unknown or already-fired handles.
    fn cancel(&mut self, handle: &ReminderHandle);
}

/// Schedules deadline reminders for tasks.
pub struct ReminderScheduler<B: NotificationBackend> {
    backend: B,
    permission: Option<bool>,
}

impl<B: NotificationBackend> ReminderScheduler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            permission: None,
        }
    }

    /// Requests notification permission once per session.
    ///
    /// Subsequent calls return the cached answer without touching the
    /// backend. Returns whether notifications are currently permitted.
    pub fn request_permission(&mut self) -> bool {
        if let Some(granted) = self.permission {
            return granted;
        }
        let granted = self.backend.request_permission();
        info!(
            "event=permission_request module=reminder status=ok granted={granted}"
        );
        self.permission = Some(granted);
        granted
    }

    /// Arranges a reminder at 09:00 local time on the task's deadline date.
    ///
    /// Returns `None` when permission is missing, the deadline does not
    /// resolve to a local instant, or the backend rejects the registration.
    /// Every failure is logged with the task id; none of them propagate.
    pub fn schedule_reminder(&mut self, task: &Task) -> Option<ReminderHandle> {
        match self.permission {
            Some(true) => {}
            Some(false) => {
                warn!(
                    "event=reminder_schedule module=reminder status=denied task_id={}",
                    task.id
                );
                return None;
            }
            None => {
                warn!(
                    "event=reminder_schedule module=reminder status=error error_code=permission_not_requested task_id={}",
                    task.id
                );
                return None;
            }
        }

        let trigger_at = match reminder_trigger(task) {
            Some(trigger_at) => trigger_at,
            None => {
                error!(
                    "event=reminder_schedule module=reminder status=error error_code=invalid_deadline task_id={} deadline={}",
                    task.id, task.deadline
                );
                return None;
            }
        };

        let notification = OneShotNotification {
            title: REMINDER_TITLE.to_string(),
            body: format!("{} for {} is due today!", task.title, task.course),
            trigger_at,
        };

        match self.backend.register(notification) {
            Ok(handle) => {
                info!(
                    "event=reminder_schedule module=reminder status=ok task_id={} handle={handle} trigger_at={trigger_at}",
                    task.id
                );
                Some(handle)
            }
            Err(err) => {
                error!(
                    "event=reminder_schedule module=reminder status=error task_id={} error={err}",
                    task.id
                );
                None
            }
        }
    }

    /// Read access to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Cancels a scheduled reminder; no-op if already fired or unknown.
    pub fn cancel_reminder(&mut self, handle: &ReminderHandle) {
        self.backend.cancel(handle);
        info!("event=reminder_cancel module=reminder status=ok handle={handle}");
    }
}

fn reminder_trigger(task: &Task) -> Option<DateTime<Local>> {
    let naive = task.deadline_date()?.and_hms_opt(REMINDER_HOUR, 0, 0)?;
    match Local.from_local_datetime(&naive) {
        // A DST gap can make 09:00 ambiguous or nonexistent; take the
        // earliest valid instant and give up on a true gap.
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}
