//! `SQLite` schema bootstrap logic.
//!
//! The table definition uses `CREATE TABLE IF NOT EXISTS` and is safe to
//! re-run on every server startup.

use sqlx::SqlitePool;

use crate::Result;

/// Apply the `todo` table definition to the connected database.
///
/// # Errors
///
/// Returns `AppError::Db` if any DDL statement fails.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    let ddl = r"
CREATE TABLE IF NOT EXISTS todo (
    id          TEXT PRIMARY KEY NOT NULL,
    text        TEXT NOT NULL CHECK(length(trim(text)) > 0),
    completed   INTEGER NOT NULL DEFAULT 0,
    priority    TEXT CHECK(priority IS NULL OR priority IN ('High','Medium','Low')),
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_todo_created_at ON todo(created_at);
";

    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}
