mod config;
mod db;
mod errors;
mod evaluation;
mod llm_client;
mod models;
mod prompts;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, initialize};
use crate::llm_client::{GeminiClient, GenerativeModel};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and seed default prompts on first start
    let pool = create_pool(&config.database_url).await?;
    initialize(&pool).await?;

    // Initialize Gemini client
    let llm: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Gemini client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db: pool,
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default filter directive scoped to this crate when RUST_LOG is unset.
/// Tracing targets use the crate identifier, so the package name's hyphen
/// must become an underscore or the directive never matches.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

#[cfg(test)]
mod tests {
    use super::default_filter_directive;

    #[test]
    fn test_default_filter_directive_matches_crate_target() {
        let directive = default_filter_directive("info");
        assert_eq!(directive, "resume_api=info");

        // The directive's target must prefix the module paths tracing emits.
        let target = directive.split('=').next().unwrap();
        assert!(module_path!().starts_with(target));
    }
}
