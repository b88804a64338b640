use studytasks_core::{Priority, Task, TaskValidationError};

fn sample_task() -> Task {
    Task {
        id: "1726000000000".to_string(),
        title: "Essay draft".to_string(),
        course: "English".to_string(),
        deadline: "2026-10-02".to_string(),
        priority: Priority::High,
        progress: 45,
    }
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = sample_task();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "1726000000000");
    assert_eq!(json["title"], "Essay draft");
    assert_eq!(json["course"], "English");
    assert_eq!(json["deadline"], "2026-10-02");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["progress"], 45);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn stored_payload_decodes_to_equal_collection() {
    // Shape of the durable mirror: one JSON array under a single key.
    let payload = r#"[
        {"id":"1","title":"Quiz prep","course":"Physics","deadline":"2026-09-20","priority":"Low","progress":0},
        {"id":"2","title":"Lab report","course":"Chemistry","deadline":"2026-09-18","priority":"Medium","progress":80}
    ]"#;

    let tasks: Vec<Task> = serde_json::from_str(payload).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].priority, Priority::Low);
    assert_eq!(tasks[1].progress, 80);

    let reencoded = serde_json::to_string(&tasks).unwrap();
    let reparsed: Vec<Task> = serde_json::from_str(&reencoded).unwrap();
    assert_eq!(reparsed, tasks);
}

#[test]
fn validate_rejects_empty_course() {
    let mut task = sample_task();
    task.course = String::new();
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyCourse));
}

#[test]
fn deadline_date_parses_iso_dates_only() {
    let mut task = sample_task();
    assert!(task.deadline_date().is_some());

    task.deadline = "October 2nd".to_string();
    assert!(task.deadline_date().is_none());
}

#[test]
fn is_complete_only_at_full_progress() {
    let mut task = sample_task();
    assert!(!task.is_complete());
    task.progress = 100;
    assert!(task.is_complete());
}
