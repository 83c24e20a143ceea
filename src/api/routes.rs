//! Route table and request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use super::AppState;
use crate::models::todo::{NewTodo, Todo};
use crate::persistence::todo_repo::TodoRepo;
use crate::{AppError, Result};

/// Build the application router.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .with_state(state)
}

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// `GET /api/todos`: every row, newest first.
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>> {
    let repo = TodoRepo::new(Arc::clone(&state.db));
    let todos = repo.list_all().await?;
    info!(count = todos.len(), "todos listed");
    Ok(Json(todos))
}

/// `POST /api/todos`: validate the body, insert, echo the stored row.
async fn create_todo(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewTodo>, JsonRejection>,
) -> Result<Json<Todo>> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let todo = input.into_todo()?;

    let repo = TodoRepo::new(Arc::clone(&state.db));
    let created = repo.insert(&todo).await?;
    info!(id = %created.id, "todo created");
    Ok(Json(created))
}
