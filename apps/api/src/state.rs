use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pluggable generative model. Production wires `GeminiClient`; tests
    /// substitute a deterministic stub.
    pub llm: Arc<dyn GenerativeModel>,
    pub config: Config,
}
