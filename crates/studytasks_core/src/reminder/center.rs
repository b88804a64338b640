//! In-process notification backend.
//!
//! Stands in for the device notification facility: holds scheduled
//! notifications in a registry keyed by handle. Used by tests and smoke
//! probes, and usable as a host-side backend until a platform integration
//! exists.

use super::scheduler::{
    NotificationBackend, OneShotNotification, ReminderHandle, SchedulingError,
};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Registry-backed notification center.
#[derive(Debug)]
pub struct InProcessNotificationCenter {
    permitted: bool,
    pending: BTreeMap<ReminderHandle, OneShotNotification>,
}

impl InProcessNotificationCenter {
    /// Creates a center that grants permission when asked.
    pub fn new() -> Self {
        Self {
            permitted: true,
            pending: BTreeMap::new(),
        }
    }

    /// Creates a center with a fixed permission answer.
    pub fn with_permission(granted: bool) -> Self {
        Self {
            permitted: granted,
            pending: BTreeMap::new(),
        }
    }

    /// Number of notifications currently scheduled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Looks up a scheduled notification by handle.
    pub fn get(&self, handle: &ReminderHandle) -> Option<&OneShotNotification> {
        self.pending.get(handle)
    }

    /// Removes and returns every notification whose trigger is at or before
    /// `instant`, simulating delivery.
    pub fn due_before(&mut self, instant: DateTime<Local>) -> Vec<OneShotNotification> {
        let due: Vec<ReminderHandle> = self
            .pending
            .iter()
            .filter(|(_, notification)| notification.trigger_at <= instant)
            .map(|(handle, _)| handle.clone())
            .collect();

        due.into_iter()
            .filter_map(|handle| self.pending.remove(&handle))
            .collect()
    }
}

impl NotificationBackend for InProcessNotificationCenter {
    fn request_permission(&mut self) -> bool {
        self.permitted
    }

    fn register(
        &mut self,
        notification: OneShotNotification,
    ) -> Result<ReminderHandle, SchedulingError> {
        if !self.permitted {
            return Err(SchedulingError::Rejected(
                "notification permission not granted".to_string(),
            ));
        }
        let handle = ReminderHandle::generate();
        self.pending.insert(handle.clone(), notification);
        Ok(handle)
    }

    fn cancel(&mut self, handle: &ReminderHandle) {
        self.pending.remove(handle);
    }
}
