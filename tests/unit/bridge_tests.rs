//! Unit tests for `PersistenceBridge` hydrate/save behaviour.

use todo_keeper::models::priority::Priority;
use todo_keeper::state::TaskList;
use todo_keeper::storage::{MemoryStorage, PersistenceBridge, StoragePort, DEFAULT_STORAGE_KEY};
use todo_keeper::AppError;

#[test]
fn hydrate_missing_key_yields_empty_list() {
    let bridge = PersistenceBridge::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
    let list = bridge.hydrate().expect("hydrate");
    assert!(list.is_empty());
}

#[test]
fn save_then_hydrate_preserves_order_and_fields() {
    let mut list = TaskList::new();
    list.add_at("one", Priority::High, 1);
    list.add_at("two", Priority::Low, 2);
    list.add_at("three", Priority::Medium, 3);
    list.toggle(2);

    let mut bridge = PersistenceBridge::new(MemoryStorage::new(), "todos");
    bridge.save(&list).expect("save");
    let restored = bridge.hydrate().expect("hydrate");

    assert_eq!(restored.tasks(), list.tasks());
}

#[test]
fn save_writes_json_array_under_key() {
    let mut list = TaskList::new();
    list.add_at("Buy milk", Priority::Medium, 1_700_000_000_000);

    let mut bridge = PersistenceBridge::new(MemoryStorage::new(), "todos");
    bridge.save(&list).expect("save");

    let raw = bridge
        .storage()
        .get_item("todos")
        .expect("get")
        .expect("stored");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1_700_000_000_000_i64,
            "text": "Buy milk",
            "completed": false,
            "priority": "Medium"
        }])
    );
}

#[test]
fn hydrate_reads_page_format() {
    let raw = r#"[{"id":5,"text":"water plants","completed":true,"priority":"Low"}]"#;
    let bridge = PersistenceBridge::new(MemoryStorage::with_item("todos", raw), "todos");

    let list = bridge.hydrate().expect("hydrate");
    assert_eq!(list.len(), 1);
    let task = list.get(5).expect("task");
    assert!(task.completed);
    assert_eq!(task.priority, Priority::Low);
}

#[test]
fn hydrate_corrupt_value_is_storage_error() {
    let bridge = PersistenceBridge::new(MemoryStorage::with_item("todos", "{not json"), "todos");
    let err = bridge.hydrate().expect_err("corrupt value must fail");
    assert!(matches!(err, AppError::Storage(_)), "got {err}");
}

#[test]
fn hydrate_wrong_shape_is_storage_error() {
    let bridge =
        PersistenceBridge::new(MemoryStorage::with_item("todos", r#"["just a string"]"#), "todos");
    assert!(matches!(bridge.hydrate(), Err(AppError::Storage(_))));
}

#[test]
fn bridge_uses_its_own_key_only() {
    let storage = MemoryStorage::with_item("other", "garbage");
    let mut bridge = PersistenceBridge::new(storage, "todos");
    assert!(bridge.hydrate().expect("hydrate").is_empty());

    bridge.save(&TaskList::new()).expect("save");
    let storage = bridge.into_storage();
    assert_eq!(storage.get_item("todos").expect("get").as_deref(), Some("[]"));
    assert_eq!(storage.get_item("other").expect("get").as_deref(), Some("garbage"));
}
