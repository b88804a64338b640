use studytasks_core::{project, Priority, PriorityFilter, SortKey, Task};

fn task(id: &str, deadline: &str, priority: Priority, progress: u8) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        course: "Physics".to_string(),
        deadline: deadline.to_string(),
        priority,
        progress,
    }
}

#[test]
fn deadline_sort_is_ascending_with_stable_ties() {
    let tasks = vec![
        task("A", "2024-03-01", Priority::Medium, 0),
        task("B", "2024-01-10", Priority::Medium, 0),
        task("C", "2024-01-10", Priority::Medium, 0),
    ];

    let view = project(&tasks, PriorityFilter::All, SortKey::Deadline);
    let order: Vec<&str> = view.iter().map(|t| t.id.as_str()).collect();

    // B and C share a deadline; B entered first and must stay first.
    assert_eq!(order, ["B", "C", "A"]);
}

#[test]
fn priority_sort_orders_by_label_text() {
    let tasks = vec![
        task("m", "2024-01-01", Priority::Medium, 0),
        task("l", "2024-01-01", Priority::Low, 0),
        task("h", "2024-01-01", Priority::High, 0),
    ];

    let view = project(&tasks, PriorityFilter::All, SortKey::Priority);
    let order: Vec<&str> = view.iter().map(|t| t.id.as_str()).collect();

    // Label-text order, not severity order: "High" < "Low" < "Medium".
    assert_eq!(order, ["h", "l", "m"]);
}

#[test]
fn progress_sort_is_ascending_numeric() {
    let tasks = vec![
        task("a", "2024-01-01", Priority::Medium, 90),
        task("b", "2024-01-01", Priority::Medium, 10),
        task("c", "2024-01-01", Priority::Medium, 50),
    ];

    let view = project(&tasks, PriorityFilter::All, SortKey::Progress);
    let progress: Vec<u8> = view.iter().map(|t| t.progress).collect();
    assert_eq!(progress, [10, 50, 90]);
}

#[test]
fn high_priority_filter_keeps_only_high_in_input_order() {
    let tasks = vec![
        task("1", "2024-01-03", Priority::High, 0),
        task("2", "2024-01-01", Priority::Low, 0),
        task("3", "2024-01-02", Priority::High, 0),
        task("4", "2024-01-01", Priority::Medium, 0),
    ];

    let view = project(&tasks, PriorityFilter::Only(Priority::High), SortKey::Progress);
    let order: Vec<&str> = view.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, ["1", "3"]);
    assert!(view.iter().all(|t| t.priority == Priority::High));
}

#[test]
fn projection_is_pure_and_leaves_input_untouched() {
    let tasks = vec![
        task("A", "2024-03-01", Priority::High, 20),
        task("B", "2024-01-10", Priority::Low, 80),
    ];
    let snapshot = tasks.clone();

    let first = project(&tasks, PriorityFilter::All, SortKey::Deadline);
    let second = project(&tasks, PriorityFilter::All, SortKey::Deadline);

    assert_eq!(first, second);
    assert_eq!(tasks, snapshot);
    // The projection is a new sequence, reordered independently of input.
    assert_eq!(first[0].id, "B");
    assert_eq!(tasks[0].id, "A");
}

#[test]
fn projection_of_empty_collection_is_empty() {
    let view = project(&[], PriorityFilter::Only(Priority::Low), SortKey::Deadline);
    assert!(view.is_empty());
}
