//! Server-side todo row and the create-request contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::priority::Priority;
use crate::{AppError, Result};

/// A todo row stored in the `todo` table and returned by the HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier (UUID v4).
    pub id: String,
    /// Task description.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Optional urgency tag.
    pub priority: Option<Priority>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Body accepted by `POST /api/todos`.
///
/// Server-assigned fields (`id`, `createdAt`) are not part of the
/// contract; sending them, or any other unknown field, is rejected.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTodo {
    /// Task description; must be non-empty after trimming.
    pub text: String,
    /// Initial completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Optional urgency tag.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl NewTodo {
    /// Validate the payload and assign the server-owned fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `text` is blank.
    pub fn into_todo(self) -> Result<Todo> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("text must not be empty".into()));
        }

        Ok(Todo {
            id: Uuid::new_v4().to_string(),
            text: text.to_owned(),
            completed: self.completed,
            priority: self.priority,
            created_at: Utc::now(),
        })
    }
}
