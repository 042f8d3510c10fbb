//! Resume Evaluator — renders a submitted PDF's first page, composes the
//! master instruction from the stored prompts, and asks the model for a
//! free-text report.
//!
//! Every failure mode is converted to a structured `{error}` body here;
//! nothing propagates past this boundary as a fault.

pub mod handlers;
pub mod pdf;
pub mod prompts;

use serde::Serialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::llm_client::GenerativeModel;
use crate::prompts::store;

const JPEG_MIME: &str = "image/jpeg";

/// Body of a completed evaluation request. Always HTTP 200; callers inspect
/// the body for the `error` key.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EvaluationOutcome {
    Report { response: String },
    Failure { error: String },
}

impl EvaluationOutcome {
    fn failure(message: impl Into<String>) -> Self {
        EvaluationOutcome::Failure {
            error: message.into(),
        }
    }
}

/// Builds the master instruction with the three prompt texts embedded
/// verbatim, numbered 1..=3. Appended rather than template-substituted so a
/// stored prompt can never be mangled by a later substitution pass.
fn compose_master_instruction(prompt_texts: &[String]) -> String {
    use std::fmt::Write as _;

    let mut master = String::from(prompts::MASTER_INSTRUCTION_PREAMBLE);
    master.push_str("\n\n");
    for (i, text) in prompt_texts.iter().enumerate() {
        let _ = writeln!(master, "{}. {}", i + 1, text);
    }
    master.push('\n');
    master.push_str(prompts::MASTER_INSTRUCTION_REPORT_REQUEST);
    master
}

/// Runs the full evaluation flow for one base64-encoded PDF.
pub async fn evaluate_resume(
    db: &SqlitePool,
    llm: &dyn GenerativeModel,
    base64_pdf: &str,
) -> EvaluationOutcome {
    // Step 1-2: decode + rasterize page one
    let image_base64 = match pdf::render_first_page_jpeg(base64_pdf) {
        Ok(jpeg) => pdf::encode_jpeg_base64(&jpeg),
        Err(e) => {
            warn!("PDF processing failed: {e}");
            return EvaluationOutcome::failure(format!("PDF processing failed: {e}"));
        }
    };

    // Step 3: fetch prompts; the model is never called with a partial set
    let prompt_rows = match store::list(db).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Prompt lookup failed during evaluation: {e}");
            return EvaluationOutcome::failure(format!("Database error: {e}"));
        }
    };
    if prompt_rows.len() < 3 {
        return EvaluationOutcome::failure("Not enough prompts in database.");
    }

    let prompt_texts: Vec<String> = prompt_rows.into_iter().map(|r| r.prompt_text).collect();
    let master_instruction = compose_master_instruction(&prompt_texts);

    // Step 4: single inference call, no retries
    match llm
        .generate(
            prompts::ANALYZE_INSTRUCTION,
            &image_base64,
            JPEG_MIME,
            &master_instruction,
        )
        .await
    {
        Ok(response) => EvaluationOutcome::Report { response },
        Err(e) => {
            warn!("Gemini API error: {e}");
            EvaluationOutcome::failure(format!("Gemini API error: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::pdf::test_support::minimal_pdf_base64;
    use super::*;
    use crate::db::test_pool;
    use crate::llm_client::LlmError;

    /// Stub model returning fixed text and counting invocations.
    struct StubModel {
        reply: Result<&'static str, ()>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerativeModel for StubModel {
        async fn generate(
            &self,
            _instruction: &str,
            _image_base64: &str,
            _mime_type: &str,
            _master_instruction: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::Api {
                    status: 429,
                    message: "quota exceeded".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_valid_pdf_returns_model_response() {
        let pool = test_pool().await;
        let model = StubModel::replying("OK");

        let outcome = evaluate_resume(&pool, &model, &minimal_pdf_base64()).await;

        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"response": "OK"}));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_pdf_payload_reports_processing_failure() {
        let pool = test_pool().await;
        let model = StubModel::replying("OK");
        let payload = pdf::encode_jpeg_base64(b"random bytes, definitely not a pdf");

        let outcome = evaluate_resume(&pool, &model, &payload).await;

        let value = serde_json::to_value(&outcome).unwrap();
        let error = value["error"].as_str().unwrap();
        assert!(error.contains("PDF processing failed"), "got: {error}");
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_too_few_prompts_skips_model_call() {
        let pool = test_pool().await;
        sqlx::query("DELETE FROM prompts WHERE id = 3")
            .execute(&pool)
            .await
            .unwrap();
        let model = StubModel::replying("OK");

        let outcome = evaluate_resume(&pool, &model, &minimal_pdf_base64()).await;

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "Not enough prompts in database."})
        );
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_failure_reports_gemini_error() {
        let pool = test_pool().await;
        let model = StubModel::failing();

        let outcome = evaluate_resume(&pool, &model, &minimal_pdf_base64()).await;

        let value = serde_json::to_value(&outcome).unwrap();
        let error = value["error"].as_str().unwrap();
        assert!(error.contains("Gemini API error"), "got: {error}");
        assert!(error.contains("quota exceeded"), "got: {error}");
    }

    #[test]
    fn test_master_instruction_embeds_numbered_prompts() {
        let texts = vec![
            "first question".to_string(),
            "second question".to_string(),
            "third question".to_string(),
        ];
        let master = compose_master_instruction(&texts);

        assert!(master.starts_with("You are a highly skilled HR professional"));
        assert!(master.contains("1. first question"));
        assert!(master.contains("2. second question"));
        assert!(master.contains("3. third question"));
        assert!(master.contains("- Job-fit analysis"));
        assert!(master.contains("- Improvement suggestions"));
    }

    #[test]
    fn test_master_instruction_keeps_placeholder_like_text_verbatim() {
        // Stored prompt text may itself look like a template placeholder.
        let texts = vec![
            "check {prompt_2} markers literally".to_string(),
            "second question".to_string(),
            "third question".to_string(),
        ];
        let master = compose_master_instruction(&texts);

        assert!(master.contains("1. check {prompt_2} markers literally"));
        assert!(master.contains("2. second question"));
    }
}
