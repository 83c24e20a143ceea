//! Todo repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::models::priority::Priority;
use crate::models::todo::Todo;
use crate::{AppError, Result};

use super::db::Database;

/// Repository for todo rows backing the HTTP API.
#[derive(Clone)]
pub struct TodoRepo {
    db: Arc<Database>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: String,
    text: String,
    completed: i64,
    priority: Option<String>,
    created_at: String,
}

impl TodoRow {
    fn into_todo(self) -> Result<Todo> {
        let priority = self
            .priority
            .as_deref()
            .map(|raw| {
                raw.parse::<Priority>()
                    .map_err(|_| AppError::Db(format!("invalid priority: {raw}")))
            })
            .transpose()?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Db(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Todo {
            id: self.id,
            text: self.text,
            completed: self.completed != 0,
            priority,
            created_at,
        })
    }
}

impl TodoRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new todo row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn insert(&self, todo: &Todo) -> Result<Todo> {
        // Fixed-width UTC timestamps keep text ordering equal to time ordering.
        let created_at = todo
            .created_at
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query(
            "INSERT INTO todo (id, text, completed, priority, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&todo.id)
        .bind(&todo.text)
        .bind(i64::from(todo.completed))
        .bind(todo.priority.map(Priority::as_str))
        .bind(&created_at)
        .execute(self.db.as_ref())
        .await?;

        self.get_by_id(&todo.id).await
    }

    /// Retrieve a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the row does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Todo> {
        let row: Option<TodoRow> = sqlx::query_as(
            "SELECT id, text, completed, priority, created_at FROM todo WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.db.as_ref())
        .await?;

        row.ok_or_else(|| AppError::NotFound(format!("todo {id} not found")))?
            .into_todo()
    }

    /// Fetch every todo, newest first.
    ///
    /// Rows created in the same microsecond fall back to insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Todo>> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            "SELECT id, text, completed, priority, created_at
             FROM todo
             ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(self.db.as_ref())
        .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }
}
