//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studytasks_core` wiring end to
//!   end: storage bootstrap, store mutations, projection, reminder
//!   scheduling.
//! - Keep output deterministic for quick local sanity checks.

use studytasks_core::{
    core_version, open_store_in_memory, InProcessNotificationCenter, NewTask, Priority,
    PriorityFilter, ReminderScheduler, SortKey, SqliteKeyValueStorage, StoreConfig, TaskStore,
};

fn main() {
    println!("studytasks_core version={}", core_version());

    let conn = match open_store_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("storage bootstrap failed: {err}");
            std::process::exit(1);
        }
    };

    let mut store = TaskStore::new(SqliteKeyValueStorage::new(conn), StoreConfig::default());
    store.load();

    let first = match store.create(NewTask::new(
        "Problem set 4",
        "Mathematics",
        "2026-09-15",
        Priority::High,
    )) {
        Ok(task) => task,
        Err(err) => {
            eprintln!("task creation failed: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = store.create(NewTask::new(
        "Lab report",
        "Chemistry",
        "2026-09-10",
        Priority::Medium,
    )) {
        eprintln!("task creation failed: {err}");
        std::process::exit(1);
    }

    let view = studytasks_core::project(store.tasks(), PriorityFilter::All, SortKey::Deadline);
    println!("tasks={}", view.len());
    for task in &view {
        println!(
            "task title={} course={} deadline={} priority={} progress={}",
            task.title, task.course, task.deadline, task.priority, task.progress
        );
    }

    let mut scheduler = ReminderScheduler::new(InProcessNotificationCenter::new());
    let permitted = scheduler.request_permission();
    let scheduled = scheduler.schedule_reminder(&first).is_some();
    println!("reminder permitted={permitted} scheduled={scheduled}");
}
