//! Task list operations: add, toggle, edit, delete and the bulk actions.
//!
//! Every operation is a plain in-memory transition. Invalid input (blank
//! text, unknown ids) leaves the list untouched and is reported only
//! through the return value; persistence is the caller's business.

use chrono::Utc;

use super::edit::EditState;
use crate::models::priority::Priority;
use crate::models::task::{Task, TaskId};

/// Ordered task list, newest first, plus its edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    edit: EditState,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-persisted records, keeping their order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            edit: EditState::Viewing,
        }
    }

    /// All records in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed records.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Current edit mode.
    #[must_use]
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Add a task stamped with the current time.
    ///
    /// Returns `None` without touching the list when `text` is blank.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<&Task> {
        self.add_at(text, priority, Utc::now().timestamp_millis())
    }

    /// Add a task whose identifier is derived from `now_millis`.
    ///
    /// The identifier is bumped past any existing record with the same
    /// value so ids stay unique even for adds within one millisecond.
    /// Returns `None` if no free id remains above `now_millis`.
    pub fn add_at(&mut self, text: &str, priority: Priority, now_millis: i64) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut id = now_millis;
        while self.get(id).is_some() {
            id = id.checked_add(1)?;
        }

        self.tasks.insert(0, Task::new(id, text.to_owned(), priority));
        self.tasks.first()
    }

    /// Flip the completion flag of `id`. Returns `false` if no such record.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Open `id` for editing with `text` as the initial draft.
    ///
    /// Any edit in progress on another record is abandoned. Returns
    /// `false` and leaves the edit mode alone if `id` is unknown.
    pub fn start_edit(&mut self, id: TaskId, text: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.edit = EditState::Editing {
            id,
            draft: text.to_owned(),
        };
        true
    }

    /// Replace the draft of the record being edited.
    pub fn update_draft(&mut self, text: &str) -> bool {
        match &mut self.edit {
            EditState::Editing { draft, .. } => {
                text.clone_into(draft);
                true
            }
            EditState::Viewing => false,
        }
    }

    /// Store `text` as the new description of `id`.
    ///
    /// Unknown ids and blank text are no-ops; a blank commit keeps the
    /// edit open. A successful commit of the record under edit returns
    /// the list to `Viewing`.
    pub fn commit_edit(&mut self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        text.clone_into(&mut task.text);
        if self.edit.is_editing(id) {
            self.edit = EditState::Viewing;
        }
        true
    }

    /// Commit the current draft, if an edit is in progress.
    pub fn commit_draft(&mut self) -> bool {
        match self.edit.clone() {
            EditState::Editing { id, draft } => self.commit_edit(id, &draft),
            EditState::Viewing => false,
        }
    }

    /// Leave edit mode, discarding any draft.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Remove the record `id`. Returns `false` if no such record.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        if self.edit.is_editing(id) {
            self.edit = EditState::Viewing;
        }
        true
    }

    /// Mark every record completed. Returns how many changed.
    pub fn complete_all(&mut self) -> usize {
        let mut changed = 0;
        for task in self.tasks.iter_mut().filter(|task| !task.completed) {
            task.completed = true;
            changed += 1;
        }
        changed
    }

    /// Remove every record. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        self.edit = EditState::Viewing;
        removed
    }
}
