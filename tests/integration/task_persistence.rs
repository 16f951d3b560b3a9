//! Integration tests for task persistence across process restarts.
//!
//! Uses the file-backed storage adapter in a temp directory to verify
//! that every effective mutation is durably saved and that restore
//! tolerates absent or corrupt data.

use std::sync::Arc;

use taskdeck::storage::{FileStorage, MemoryStorage, StorageAdapter, TASKS_KEY};
use taskdeck::tasks::TaskStore;
use taskdeck_model::{Priority, Task, TaskId};

fn reopen(storage: Arc<FileStorage>) -> TaskStore<FileStorage> {
    let mut store = TaskStore::new(storage);
    store.restore();
    store
}

#[test]
fn collection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    let mut store = TaskStore::new(Arc::clone(&storage));
    store.add(Task::new("Buy milk", Priority::Low)).unwrap();
    store.add(Task::new("Ship release", Priority::High)).unwrap();

    let store = reopen(storage);
    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Buy milk", "Ship release"]);
}

#[test]
fn every_mutation_is_persisted_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    let mut store = TaskStore::new(Arc::clone(&storage));
    let task = Task::new("Toggle me", Priority::Medium);
    let id = task.id.clone();
    store.add(task).unwrap();
    store.toggle_completed(&id).unwrap();
    store.set_priority(&id, Priority::High).unwrap();
    store.toggle_favorite(&id).unwrap();

    // A fresh store sees all of it without the first one in scope.
    let store = reopen(storage);
    let restored = store.get(&id).unwrap();
    assert!(restored.completed);
    assert!(restored.favorite);
    assert_eq!(restored.priority, Priority::High);
}

#[test]
fn delete_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    let mut store = TaskStore::new(Arc::clone(&storage));
    let task = Task::new("Doomed", Priority::Low);
    let id = task.id.clone();
    store.add(task).unwrap();
    store.add(Task::new("Survivor", Priority::Low)).unwrap();
    store.delete(&id).unwrap();

    let store = reopen(storage);
    assert_eq!(store.tasks().len(), 1);
    assert!(store.get(&id).is_none());
}

#[test]
fn corrupt_persisted_data_restores_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));
    storage.set(TASKS_KEY, "{{ definitely not json").unwrap();

    let store = reopen(storage);
    assert!(store.tasks().is_empty());
}

#[test]
fn restore_from_empty_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = reopen(Arc::new(FileStorage::new(dir.path())));
    assert!(store.tasks().is_empty());
}

#[test]
fn noop_mutations_never_write() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = TaskStore::new(Arc::clone(&storage));
    store.add(Task::new("Only task", Priority::Medium)).unwrap();

    let writes = storage.write_count();
    let ghost = TaskId::new("no-such-id");
    store.toggle_completed(&ghost).unwrap();
    store.delete(&ghost).unwrap();
    store.set_priority(&ghost, Priority::High).unwrap();
    store.toggle_favorite(&ghost).unwrap();
    assert_eq!(storage.write_count(), writes);
}

#[test]
fn add_increases_length_by_exactly_one() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = TaskStore::new(storage);
    for i in 0..5 {
        let before = store.tasks().len();
        store
            .add(Task::new(format!("Task {i}"), Priority::Medium))
            .unwrap();
        assert_eq!(store.tasks().len(), before + 1);
    }
}

#[test]
fn restored_collection_keeps_original_document_format() {
    // A document written by the original web client restores cleanly.
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));
    storage
        .set(
            TASKS_KEY,
            r#"[{"id":"1712345678901","text":"Plan sprint","completed":true,
                "priority":"high","createdAt":"2026-08-20T09:30:00.000Z",
                "categories":["work"],"favorite":false}]"#,
        )
        .unwrap();

    let store = reopen(storage);
    assert_eq!(store.tasks().len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.id.as_str(), "1712345678901");
    assert!(task.completed);
    assert_eq!(task.priority, Priority::High);
}
