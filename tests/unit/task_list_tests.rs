//! Unit tests for `TaskList` view-state operations.

use todo_keeper::models::priority::Priority;
use todo_keeper::state::TaskList;

fn list_with(texts: &[&str]) -> TaskList {
    let mut list = TaskList::new();
    let mut now = 1_000;
    for text in texts {
        list.add_at(text, Priority::Medium, now);
        now += 1;
    }
    list
}

// ─── add ──────────────────────────────────────────────────────────────

#[test]
fn add_blank_text_is_noop() {
    let mut list = list_with(&["existing"]);
    let before = list.clone();

    assert!(list.add("", Priority::High).is_none());
    assert!(list.add("   \t\n", Priority::Low).is_none());
    assert_eq!(list, before);
}

#[test]
fn add_places_new_task_at_head() {
    let mut list = list_with(&["older"]);
    list.add("Buy milk", Priority::Medium);

    let head = &list.tasks()[0];
    assert_eq!(head.text, "Buy milk");
    assert!(!head.completed);
    assert_eq!(head.priority, Priority::Medium);
    assert_eq!(list.len(), 2);
}

#[test]
fn add_trims_text() {
    let mut list = TaskList::new();
    let task = list.add_at("  walk dog  ", Priority::Low, 5).expect("added");
    assert_eq!(task.text, "walk dog");
}

#[test]
fn add_within_same_millisecond_keeps_ids_unique() {
    let mut list = TaskList::new();
    list.add_at("a", Priority::Medium, 42);
    list.add_at("b", Priority::Medium, 42);
    list.add_at("c", Priority::Medium, 42);

    let mut ids: Vec<i64> = list.tasks().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![42, 43, 44]);
}

// ─── toggle ───────────────────────────────────────────────────────────

#[test]
fn toggle_flips_only_the_target() {
    let mut list = list_with(&["a", "b", "c"]);
    let target = list.tasks()[1].id;

    assert!(list.toggle(target));
    for task in list.tasks() {
        assert_eq!(task.completed, task.id == target, "task {}", task.id);
    }

    assert!(list.toggle(target));
    assert_eq!(list.completed_count(), 0);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut list = list_with(&["a"]);
    let before = list.clone();
    assert!(!list.toggle(9_999));
    assert_eq!(list, before);
}

// ─── delete ───────────────────────────────────────────────────────────

#[test]
fn delete_removes_matching_record() {
    let mut list = list_with(&["a", "b"]);
    let target = list.tasks()[0].id;

    assert!(list.delete(target));
    assert_eq!(list.len(), 1);
    assert!(list.get(target).is_none());
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut list = list_with(&["a", "b"]);
    let before = list.clone();

    assert!(!list.delete(123));
    assert!(!list.delete(123));
    assert_eq!(list, before);
}

// ─── bulk actions ─────────────────────────────────────────────────────

#[test]
fn complete_all_marks_every_task() {
    let mut list = list_with(&["a", "b", "c"]);
    let first = list.tasks()[0].id;
    list.toggle(first);

    assert_eq!(list.complete_all(), 2);
    assert_eq!(list.completed_count(), list.len());
    assert_eq!(list.complete_all(), 0);
}

#[test]
fn clear_all_empties_the_list() {
    let mut list = list_with(&["a", "b"]);
    assert_eq!(list.clear_all(), 2);
    assert!(list.is_empty());
    assert!(list.tasks().is_empty());
}

#[test]
fn completed_count_on_empty_list_is_zero() {
    assert_eq!(TaskList::new().completed_count(), 0);
}

#[test]
fn add_at_exhausted_id_space_is_noop() {
    let mut list = TaskList::new();
    list.add_at("last", Priority::Low, i64::MAX).expect("added");
    let before = list.clone();

    assert!(list.add_at("overflow", Priority::Low, i64::MAX).is_none());
    assert_eq!(list, before);
}
