/// LLM client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: no other module may call the Gemini API directly.
/// All model interactions go through `GenerativeModel`, so the evaluator can
/// be exercised against a deterministic stub in tests.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent
/// drift). A failed call is terminal for the request; no retries.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all resume evaluations.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyContent,
}

/// Narrow seam over the generative model: one multimodal call, text out.
/// The three arguments after the image mirror the fixed part ordering sent
/// to the API (instruction, inline image, master instruction).
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        instruction: &str,
        image_base64: &str,
        mime_type: &str,
        master_instruction: &str,
    ) -> Result<String, LlmError>;
}

// ── Gemini wire format ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

/// Gemini client used for all evaluations in production.
/// Wraps the `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        instruction: &str,
        image_base64: &str,
        mime_type: &str,
        master_instruction: &str,
    ) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: instruction },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: image_base64,
                        },
                    },
                    Part::Text {
                        text: master_instruction,
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's message rather than the raw body when possible
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;
        let text = generate_response.text().ok_or(LlmError::EmptyContent)?;

        debug!("Gemini call succeeded: {} chars of text", text.len());
        Ok(text.to_string())
    }
}
