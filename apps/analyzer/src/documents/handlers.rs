//! Axum route handlers for the document upload API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::analysis::search::parse_terms;
use crate::analysis::DocumentType;
use crate::documents::pipeline::{analyze_upload, AnalysisRequest, DocumentReport};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_FILE_NAME: &str = "upload.pdf";

/// POST /api/v1/documents/analyze
///
/// Multipart fields: `file` (required), `doc_type`, `role`, `compare_role` (repeatable),
/// `terms` (comma-separated), `keyword_count`.
/// An unreadable PDF is still a 200: the report's `status` says `extraction_failed`.
pub async fn handle_analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentReport>, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut doc_type = DocumentType::default();
    let mut role = None;
    let mut compare_roles = Vec::new();
    let mut terms = Vec::new();
    let mut keyword_count = state.config.default_keyword_count;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, bytes));
            }
            "doc_type" => {
                let value = field.text().await.map_err(multipart_error)?;
                doc_type = DocumentType::parse(&value).ok_or_else(|| {
                    AppError::Validation(format!(
                        "doc_type must be 'research' or 'resume', got '{value}'"
                    ))
                })?;
            }
            "role" => {
                let value = field.text().await.map_err(multipart_error)?;
                if !value.trim().is_empty() {
                    role = Some(value.trim().to_string());
                }
            }
            "compare_role" => {
                let value = field.text().await.map_err(multipart_error)?;
                if !value.trim().is_empty() {
                    compare_roles.push(value.trim().to_string());
                }
            }
            "terms" => {
                let value = field.text().await.map_err(multipart_error)?;
                terms.extend(parse_terms(&value));
            }
            "keyword_count" => {
                let value = field.text().await.map_err(multipart_error)?;
                keyword_count = value.trim().parse().map_err(|_| {
                    AppError::Validation(format!(
                        "keyword_count must be a non-negative integer, got '{value}'"
                    ))
                })?;
            }
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let request = AnalysisRequest {
        file_name,
        bytes,
        doc_type,
        role,
        compare_roles,
        terms,
        keyword_count,
    };

    Ok(Json(
        analyze_upload(state.extractor.as_ref(), request).await,
    ))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}
