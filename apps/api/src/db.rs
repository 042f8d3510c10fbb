use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// The three built-in prompts seeded on first startup.
const DEFAULT_PROMPTS: [(i64, &str, &str); 3] = [
    (
        1,
        "Is the resume tailored to the target job description?",
        "Job Fit Analysis",
    ),
    (
        2,
        "Are there any red flags like gaps or poor formatting?",
        "Red Flag Detection",
    ),
    (
        3,
        "What improvements can enhance clarity or impact?",
        "Improvement Suggestions",
    ),
];

/// Creates and returns a SQLite connection pool, creating the database file
/// if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the prompts table and seeds the default rows when the table is
/// empty. Idempotent: safe to run on every process start.
pub async fn initialize(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prompts (
            id INTEGER PRIMARY KEY,
            prompt_text TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prompts")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        for (id, prompt_text, description) in DEFAULT_PROMPTS {
            sqlx::query("INSERT INTO prompts (id, prompt_text, description) VALUES (?1, ?2, ?3)")
                .bind(id)
                .bind(prompt_text)
                .bind(description)
                .execute(pool)
                .await?;
        }
        info!("Seeded {} default prompts", DEFAULT_PROMPTS.len());
    }

    Ok(())
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    // Single connection so the in-memory database is shared across queries.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    initialize(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let pool = test_pool().await;
        initialize(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prompts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_seed_preserves_edited_text() {
        let pool = test_pool().await;
        sqlx::query("UPDATE prompts SET prompt_text = 'edited' WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        // A restart must not clobber operator edits.
        initialize(&pool).await.unwrap();
        let text: String = sqlx::query_scalar("SELECT prompt_text FROM prompts WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(text, "edited");
    }
}
