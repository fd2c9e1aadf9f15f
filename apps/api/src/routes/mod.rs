pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_extract_text;
use crate::layout::handlers::handle_font_sizing;
use crate::render::handlers::handle_render;
use crate::resume::handlers::{handle_extract, handle_transform};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Upload → plain text
        .route("/api/v1/extract-text", post(handle_extract_text))
        // Plain text → structured → American style
        .route("/api/v1/resume/extract", post(handle_extract))
        .route("/api/v1/resume/transform", post(handle_transform))
        // Page fit + print
        .route("/api/v1/layout/font-sizing", post(handle_font_sizing))
        .route("/api/v1/render", post(handle_render))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
