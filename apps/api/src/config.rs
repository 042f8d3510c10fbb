use anyhow::{Context, Result};

/// Default admin UI directory, relative to the workspace root where
/// `cargo run` executes. Override with ADMIN_DIR for other deployments.
pub const DEFAULT_ADMIN_DIR: &str = "apps/api/admin";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — the Gemini API key in
/// particular must never ship as a source-level default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub admin_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://prompts.db".to_string()),
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            admin_dir: std::env::var("ADMIN_DIR")
                .unwrap_or_else(|_| DEFAULT_ADMIN_DIR.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
