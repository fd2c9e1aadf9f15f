//! Axum route handler for the sizing engine.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::page::{LayoutConfig, PageSize};
use crate::layout::sizing::{estimate_line_count, fits_on_page, size_for_weight, FontSizingConfig};
use crate::layout::weight::content_weight;
use crate::models::StructuredResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FontSizingRequest {
    pub resume: StructuredResume,
    /// Overrides the configured default paper size for this call.
    pub page_size: Option<PageSize>,
}

#[derive(Debug, Serialize)]
pub struct FontSizingResponse {
    #[serde(flatten)]
    pub sizing: FontSizingConfig,
    pub page_size: PageSize,
    pub content_weight: f32,
    pub estimated_lines: u32,
    pub fits: bool,
}

/// Layout config for a request: the startup config, re-targeted when the caller
/// asks for a different paper size.
pub fn layout_for(state: &AppState, page_size: Option<PageSize>) -> LayoutConfig {
    match page_size {
        Some(size) if size != state.layout.page_size => state.layout.with_page_size(size),
        _ => (*state.layout).clone(),
    }
}

/// POST /api/v1/layout/font-sizing
///
/// Computes the typography for a resume. Nothing is stored; the client calls this
/// again whenever the content changes.
pub async fn handle_font_sizing(
    State(state): State<AppState>,
    Json(request): Json<FontSizingRequest>,
) -> Result<Json<FontSizingResponse>, AppError> {
    let config = layout_for(&state, request.page_size);

    let weight = content_weight(&request.resume, &config.weights);
    let sizing = size_for_weight(weight, &config);
    let estimated_lines = estimate_line_count(weight, sizing.body_font_size, &config);
    let fits = fits_on_page(weight, &sizing, &config);

    info!(
        weight,
        body = sizing.body_font_size,
        estimated_lines,
        fits,
        "Font sizing computed"
    );

    Ok(Json(FontSizingResponse {
        sizing,
        page_size: config.page_size,
        content_weight: weight,
        estimated_lines,
        fits,
    }))
}
