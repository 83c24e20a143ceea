//! Client-side task record held by the view-state.

use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// Task identifier: the creation time in milliseconds since the Unix epoch.
pub type TaskId = i64;

/// One to-do item in the client list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier within the list.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Urgency tag.
    pub priority: Priority,
}

impl Task {
    /// Construct a new, not yet completed task.
    #[must_use]
    pub fn new(id: TaskId, text: String, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
        }
    }
}
