//! Read/write adapter between the task list and a [`StoragePort`].

use tracing::{debug, warn};

use super::StoragePort;
use crate::models::task::Task;
use crate::state::TaskList;
use crate::Result;

/// Serializes the task list under one fixed storage key.
#[derive(Debug, Clone)]
pub struct PersistenceBridge<S> {
    storage: S,
    key: String,
}

impl<S: StoragePort> PersistenceBridge<S> {
    /// Create a bridge writing under `key`.
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the underlying store.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the task list. A missing key yields an empty list.
    ///
    /// The stored value is taken verbatim; nothing is migrated or
    /// repaired.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the store cannot be read or the
    /// stored value is not a JSON array of task records.
    pub fn hydrate(&self) -> Result<TaskList> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            debug!(key = %self.key, "no stored task list; starting empty");
            return Ok(TaskList::new());
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw).inspect_err(|err| {
            warn!(key = %self.key, %err, "stored task list is malformed");
        })?;
        debug!(key = %self.key, count = tasks.len(), "task list hydrated");
        Ok(TaskList::from_tasks(tasks))
    }

    /// Write the full list under the storage key.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if serialization or the write fails.
    pub fn save(&mut self, list: &TaskList) -> Result<()> {
        let raw = serde_json::to_string(list.tasks())?;
        self.storage.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = list.len(), "task list saved");
        Ok(())
    }
}
