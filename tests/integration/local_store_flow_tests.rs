//! End-to-end flow over the file-backed local store: each step reopens
//! the store the way separate CLI invocations do.

use std::path::Path;

use todo_keeper::models::priority::Priority;
use todo_keeper::session::TaskSession;
use todo_keeper::storage::{FileStorage, PersistenceBridge, StoragePort};
use todo_keeper::AppError;

fn open(path: &Path) -> TaskSession<FileStorage> {
    let storage = FileStorage::open(path).expect("open store");
    TaskSession::open(PersistenceBridge::new(storage, "todos")).expect("hydrate")
}

#[test]
fn mutations_persist_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("todo-keeper.json");

    let milk = open(&path)
        .add("Buy milk", Priority::Medium)
        .expect("add")
        .expect("task")
        .id;
    let bread = open(&path)
        .add("Buy bread", Priority::High)
        .expect("add")
        .expect("task")
        .id;

    assert!(open(&path).toggle(milk).expect("toggle"));
    assert!(open(&path).commit_edit(bread, "Buy rye bread").expect("edit"));

    let session = open(&path);
    let list = session.list();
    assert_eq!(list.len(), 2);
    assert_eq!(list.tasks()[0].text, "Buy rye bread");
    assert!(list.get(milk).expect("milk").completed);
    assert_eq!(list.completed_count(), 1);

    assert_eq!(open(&path).complete_all().expect("complete"), 1);
    assert_eq!(open(&path).list().completed_count(), 2);

    open(&path).clear_all().expect("clear");
    assert!(open(&path).list().is_empty());
}

#[test]
fn corrupt_stored_list_fails_without_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("todo-keeper.json");

    let mut storage = FileStorage::open(&path).expect("open");
    storage.set_item("todos", "not a list").expect("seed");

    let bridge = PersistenceBridge::new(FileStorage::open(&path).expect("open"), "todos");
    let err = TaskSession::open(bridge).expect_err("corrupt list");
    assert!(matches!(err, AppError::Storage(_)));

    let reopened = FileStorage::open(&path).expect("reopen");
    assert_eq!(reopened.get_item("todos").expect("get").as_deref(), Some("not a list"));
}

#[test]
fn failed_save_leaves_stored_list_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sub").join("todo-keeper.json");

    let mut session = open(&path);
    session.add("Buy bread", Priority::Low).expect("add");
    let saved = session
        .bridge()
        .storage()
        .get_item("todos")
        .expect("get")
        .expect("stored");

    let parent = path.parent().expect("parent");
    std::fs::remove_dir_all(parent).expect("remove dir");
    std::fs::write(parent, "blocker").expect("write blocker");

    let err = session.add("Buy milk", Priority::Medium).expect_err("write fails");
    assert!(matches!(err, AppError::Storage(_)));
    let stored = session
        .bridge()
        .storage()
        .get_item("todos")
        .expect("get")
        .expect("stored");
    assert_eq!(stored, saved);
    assert!(!stored.contains("Buy milk"));
}
