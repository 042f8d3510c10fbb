//! Axum route handlers for the prompt admin API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::prompt::{PromptRow, PromptUpdate};
use crate::prompts::store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UpdatePromptResponse {
    pub status: String,
    pub message: String,
    pub prompt: PromptRow,
}

/// GET /prompts
pub async fn handle_list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptRow>>, AppError> {
    let prompts = store::list(&state.db).await?;
    Ok(Json(prompts))
}

/// GET /prompts/:id
pub async fn handle_get_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PromptRow>, AppError> {
    let prompt = store::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt {id} not found")))?;
    Ok(Json(prompt))
}

/// POST /update_prompt/:id
pub async fn handle_update_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PromptUpdate>,
) -> Result<Json<UpdatePromptResponse>, AppError> {
    let prompt = store::update(&state.db, id, &req.prompt_text)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt {id} not found")))?;

    Ok(Json(UpdatePromptResponse {
        status: "success".to_string(),
        message: format!("Prompt {id} updated successfully"),
        prompt,
    }))
}
