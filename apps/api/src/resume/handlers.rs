//! Axum route handlers for the resume collaborators.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::StructuredResume;
use crate::resume::{require_resume_text, serialize_bounded};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub resume_data: StructuredResume,
}

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    pub resume: StructuredResume,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub americanized_resume: StructuredResume,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/extract
///
/// Raw text (typically from `/api/v1/extract-text` or pasted by the user) → structured resume.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    require_resume_text(&request.resume_text)?;
    // Content is personal data; only its size is logged.
    info!(chars = request.resume_text.chars().count(), "Extracting resume");

    let resume_data = state
        .resume_model
        .extract(&request.resume_text)
        .await?
        .normalize();
    Ok(Json(ExtractResponse { resume_data }))
}

/// POST /api/v1/resume/transform
///
/// Structured resume → American-style English resume.
pub async fn handle_transform(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, AppError> {
    let size = serialize_bounded(&request.resume)?.len();
    info!(bytes = size, "Transforming resume");

    let americanized_resume = state
        .resume_model
        .americanize(&request.resume)
        .await?
        .normalize();
    Ok(Json(TransformResponse {
        americanized_resume,
    }))
}
