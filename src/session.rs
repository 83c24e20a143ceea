//! A task list paired with its persistence bridge.
//!
//! The session hydrates once when opened and saves the full list after
//! every operation that actually changed it. Edit-mode transitions
//! (`start_edit`, `update_draft`, `cancel_edit`) are view-only and are
//! never written to storage.

use tracing::info;

use crate::models::priority::Priority;
use crate::models::task::{Task, TaskId};
use crate::state::TaskList;
use crate::storage::{PersistenceBridge, StoragePort};
use crate::Result;

/// Owner of the client view-state for one front-end session.
#[derive(Debug)]
pub struct TaskSession<S> {
    list: TaskList,
    bridge: PersistenceBridge<S>,
}

impl<S: StoragePort> TaskSession<S> {
    /// Hydrate the list from `bridge`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the stored list cannot be read or
    /// parsed. The stored value is left as it was.
    pub fn open(bridge: PersistenceBridge<S>) -> Result<Self> {
        let list = bridge.hydrate()?;
        Ok(Self { list, bridge })
    }

    /// Current view-state.
    #[must_use]
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Borrow the persistence bridge.
    #[must_use]
    pub fn bridge(&self) -> &PersistenceBridge<S> {
        &self.bridge
    }

    /// Add a task; blank text is ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<Option<Task>> {
        let added = self.list.add(text, priority).cloned();
        if let Some(ref task) = added {
            info!(id = task.id, priority = %task.priority, "task added");
            self.persist()?;
        }
        Ok(added)
    }

    /// Flip the completion flag of `id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.toggle(id);
        if changed {
            info!(id, "task toggled");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Open `id` for editing.
    pub fn start_edit(&mut self, id: TaskId, text: &str) -> bool {
        self.list.start_edit(id, text)
    }

    /// Replace the draft of the record being edited.
    pub fn update_draft(&mut self, text: &str) -> bool {
        self.list.update_draft(text)
    }

    /// Commit `text` as the description of `id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn commit_edit(&mut self, id: TaskId, text: &str) -> Result<bool> {
        let changed = self.list.commit_edit(id, text);
        if changed {
            info!(id, "task edited");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Leave edit mode without saving the draft.
    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
    }

    /// Remove `id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.delete(id);
        if changed {
            info!(id, "task deleted");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Mark every task completed. Returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn complete_all(&mut self) -> Result<usize> {
        let changed = self.list.complete_all();
        if changed > 0 {
            info!(changed, "all tasks completed");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove every task. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if saving fails.
    pub fn clear_all(&mut self) -> Result<usize> {
        let removed = self.list.clear_all();
        if removed > 0 {
            info!(removed, "task list cleared");
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&mut self) -> Result<()> {
        self.bridge.save(&self.list)
    }
}
