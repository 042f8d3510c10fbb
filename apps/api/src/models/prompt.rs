use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the prompts table. Ids are fixed at 1..=3; rows are seeded at
/// startup and only ever updated, never created or deleted at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PromptRow {
    pub id: i64,
    pub prompt_text: String,
    pub description: String,
}

/// Request body for POST /update_prompt/:id. Only the prompt text is
/// mutable; the description is fixed at seed time.
#[derive(Debug, Deserialize)]
pub struct PromptUpdate {
    pub prompt_text: String,
}
