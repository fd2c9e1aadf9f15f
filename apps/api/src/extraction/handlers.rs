//! Axum route handler for document uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::upload::{extract_document, DocumentKind, ExtractionOutcome};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

/// POST /api/v1/extract-text
///
/// Multipart upload with a single `file` field. Returns the recovered plain text, or
/// a 400 `MANUAL_INPUT_REQUIRED` telling the client to collect pasted text instead.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    let upload = read_file_field(multipart).await?;
    let kind = DocumentKind::from_mime(&upload.content_type);
    info!(
        kind = ?kind,
        bytes = upload.bytes.len(),
        "Processing uploaded document"
    );

    let recovery = state.recovery.clone();
    let bytes = upload.bytes;
    let outcome = tokio::task::spawn_blocking(move || extract_document(kind, &bytes, &recovery))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?;

    match outcome {
        ExtractionOutcome::Text(text) => Ok(Json(ExtractTextResponse { text })),
        ExtractionOutcome::ManualInput { reason } => Err(AppError::ManualInputRequired {
            file_name: upload.file_name,
            message: reason.to_string(),
        }),
    }
}

async fn read_file_field(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation("No file provided".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}
