use chrono::{Local, NaiveDate, TimeZone};
use studytasks_core::{
    InProcessNotificationCenter, NotificationBackend, OneShotNotification, Priority,
    ReminderScheduler, SchedulingError, Task, REMINDER_HOUR,
};

fn due_task(deadline: &str) -> Task {
    Task {
        id: "1726000000000".to_string(),
        title: "Lab report".to_string(),
        course: "Chemistry".to_string(),
        deadline: deadline.to_string(),
        priority: Priority::High,
        progress: 0,
    }
}

#[test]
fn schedule_without_permission_request_returns_none() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    assert!(scheduler.schedule_reminder(&due_task("2026-09-10")).is_none());
}

#[test]
fn schedule_after_denied_permission_returns_none() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::with_permission(false));
    assert!(!scheduler.request_permission());
    assert!(scheduler.schedule_reminder(&due_task("2026-09-10")).is_none());
}

#[test]
fn permission_request_is_idempotent() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    assert!(scheduler.request_permission());
    assert!(scheduler.request_permission());
}

#[test]
fn scheduled_reminder_fires_at_nine_local_on_deadline_date() {
    let mut center = InProcessNotificationCenter::new();
    assert!(center.request_permission());

    let handle = center
        .register(OneShotNotification {
            title: "📅 Task Deadline Reminder".to_string(),
            body: "body".to_string(),
            trigger_at: Local
                .from_local_datetime(
                    &NaiveDate::from_ymd_opt(2026, 9, 10)
                        .unwrap()
                        .and_hms_opt(REMINDER_HOUR, 0, 0)
                        .unwrap(),
                )
                .single()
                .unwrap(),
        })
        .unwrap();
    assert!(center.get(&handle).is_some());
}

#[test]
fn schedule_derives_trigger_and_body_from_task() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    scheduler.request_permission();

    let task = due_task("2026-09-10");
    let handle = scheduler.schedule_reminder(&task).unwrap();

    let expected_trigger = Local
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(2026, 9, 10)
                .unwrap()
                .and_hms_opt(REMINDER_HOUR, 0, 0)
                .unwrap(),
        )
        .single()
        .unwrap();

    let notification = scheduler.backend().get(&handle).unwrap();
    assert_eq!(notification.trigger_at, expected_trigger);
    assert_eq!(notification.title, "📅 Task Deadline Reminder");
    assert_eq!(notification.body, "Lab report for Chemistry is due today!");
}

#[test]
fn schedule_with_unparseable_deadline_returns_none() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    scheduler.request_permission();
    assert!(scheduler.schedule_reminder(&due_task("tomorrow")).is_none());
}

#[test]
fn cancel_removes_pending_reminder_and_tolerates_repeats() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    scheduler.request_permission();

    let handle = scheduler.schedule_reminder(&due_task("2026-09-10")).unwrap();
    assert_eq!(scheduler.backend().pending_count(), 1);

    scheduler.cancel_reminder(&handle);
    assert_eq!(scheduler.backend().pending_count(), 0);

    // Cancelling an already-cancelled handle is a no-op.
    scheduler.cancel_reminder(&handle);
    assert_eq!(scheduler.backend().pending_count(), 0);
}

#[test]
fn center_rejects_registration_without_permission() {
    let mut center = InProcessNotificationCenter::with_permission(false);
    let err = center
        .register(OneShotNotification {
            title: "t".to_string(),
            body: "b".to_string(),
            trigger_at: Local::now(),
        })
        .unwrap_err();
    assert!(matches!(err, SchedulingError::Rejected(_)));
}

#[test]
fn due_before_drains_fired_notifications() {
    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    scheduler.request_permission();

    scheduler.schedule_reminder(&due_task("2020-01-06")).unwrap();
    scheduler.schedule_reminder(&due_task("2099-01-06")).unwrap();

    let fired = scheduler.backend_mut().due_before(Local::now());
    assert_eq!(fired.len(), 1);
    assert_eq!(scheduler.backend().pending_count(), 1);
}
