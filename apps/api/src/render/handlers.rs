//! Axum route handler for printable HTML.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::layout::handlers::layout_for;
use crate::layout::{compute_font_sizing, PageSize};
use crate::models::StructuredResume;
use crate::render::html::render_html;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: StructuredResume,
    pub page_size: Option<PageSize>,
}

/// POST /api/v1/render
///
/// Sizes the resume for one page and returns the print-ready HTML document.
/// Sizing is recomputed on every call; nothing from a previous render is reused.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    if request.resume.is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }

    let config = layout_for(&state, request.page_size);
    let sizing = compute_font_sizing(&request.resume, &config);
    info!(
        page = config.page_size.css_name(),
        body = sizing.body_font_size,
        "Rendering resume"
    );

    Ok(Html(render_html(&request.resume, &sizing, config.page_size)))
}
