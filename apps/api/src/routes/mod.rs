pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::evaluation::handlers::handle_evaluate;
use crate::prompts::handlers::{handle_get_prompt, handle_list_prompts, handle_update_prompt};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let admin_ui = ServeDir::new(&state.config.admin_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt admin API
        .route("/prompts", get(handle_list_prompts))
        .route("/prompts/:id", get(handle_get_prompt))
        .route("/update_prompt/:id", post(handle_update_prompt))
        // Resume evaluation
        .route("/evaluate", post(handle_evaluate))
        // Prebuilt admin UI
        .nest_service("/admin", admin_ui)
        .with_state(state)
}
