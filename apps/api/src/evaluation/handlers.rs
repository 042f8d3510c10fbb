//! Axum route handler for POST /evaluate.

use axum::{extract::Multipart, extract::State, Json};

use crate::errors::AppError;
use crate::evaluation::{evaluate_resume, EvaluationOutcome};
use crate::state::AppState;

/// POST /evaluate
///
/// Accepts a multipart form with a `base64_pdf` field. Once the field has
/// been read, the response is always 200: evaluation failures are reported
/// in the body under an `error` key.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationOutcome>, AppError> {
    let mut base64_pdf: Option<String> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("base64_pdf") {
            base64_pdf = Some(
                field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable form field: {e}")))?,
            );
        }
    }

    let base64_pdf = base64_pdf
        .ok_or_else(|| AppError::Validation("missing form field 'base64_pdf'".to_string()))?;

    let outcome = evaluate_resume(&state.db, state.llm.as_ref(), &base64_pdf).await;
    Ok(Json(outcome))
}
