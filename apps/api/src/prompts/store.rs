//! Storage operations for the prompts table.
//!
//! Callers receive owned row copies; each operation acquires a pool
//! connection for its single statement. Concurrent updates to the same id
//! are last-write-wins with no conflict detection.

use sqlx::SqlitePool;

use crate::models::prompt::PromptRow;

/// Returns the prompt with the given id, or `None` if no such row exists.
pub async fn get(db: &SqlitePool, id: i64) -> Result<Option<PromptRow>, sqlx::Error> {
    sqlx::query_as("SELECT id, prompt_text, description FROM prompts WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Returns all prompts ordered by ascending id.
pub async fn list(db: &SqlitePool) -> Result<Vec<PromptRow>, sqlx::Error> {
    sqlx::query_as("SELECT id, prompt_text, description FROM prompts ORDER BY id")
        .fetch_all(db)
        .await
}

/// Replaces the prompt text for the given id, leaving the description
/// untouched. Returns the updated row, or `None` if the id does not exist.
pub async fn update(
    db: &SqlitePool,
    id: i64,
    new_text: &str,
) -> Result<Option<PromptRow>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE prompts SET prompt_text = ?1 WHERE id = ?2 \
         RETURNING id, prompt_text, description",
    )
    .bind(new_text)
    .bind(id)
    .fetch_optional(db)
    .await
}
