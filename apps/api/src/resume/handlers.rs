//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::resume::analyzer::ResumeAnalysis;
use crate::resume::extract::{extract_pdf_text, is_pdf};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

fn too_large(max_bytes: usize) -> AppError {
    AppError::PayloadTooLarge(format!("File exceeds the {max_bytes} byte limit"))
}

/// Body-limit failures surface while streaming any field, not only `file`.
fn upload_error(e: MultipartError, max_bytes: usize, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(max_bytes)
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// POST /api/v1/resume/analyze
///
/// Scores already-extracted resume text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeTextRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(state.resume_scorer.analyze(&request.text)))
}

/// POST /api/v1/resume/analyze-file
///
/// Accepts a multipart upload with a single PDF in the `file` field.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let max_bytes = state.config.resume_max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, max_bytes, "Malformed multipart body"))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("No filename provided".to_string()))?
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, max_bytes, "Failed to read file data"))?;

        if data.len() > max_bytes {
            return Err(too_large(max_bytes));
        }

        if !is_pdf(&file_name, &data) {
            return Err(AppError::Validation(
                "Only PDF files are supported for analysis".to_string(),
            ));
        }

        let text = extract_pdf_text(data).await?;
        let analysis = state.resume_scorer.analyze(&text);
        info!(
            file_name = %file_name,
            score = analysis.score,
            word_count = analysis.word_count,
            "Resume file analyzed"
        );
        return Ok(Json(analysis));
    }

    Err(AppError::Validation(format!(
        "No '{UPLOAD_FIELD}' field found in upload"
    )))
}
