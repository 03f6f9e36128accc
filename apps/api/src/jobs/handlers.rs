//! Axum route handlers for the Job Search API.

use axum::{extract::State, Json};

use crate::errors::{AppError, AppJson};
use crate::jobs::models::{JobPosting, SearchQuery, SearchResponse};
use crate::state::AppState;

fn validate(query: &SearchQuery) -> Result<(), AppError> {
    if query.start < 1 {
        return Err(AppError::Validation("start must be >= 1".to_string()));
    }
    Ok(())
}

/// POST /api/v1/jobs/search
///
/// Searches the external provider, falling back to the built-in catalog.
pub async fn handle_search(
    State(state): State<AppState>,
    AppJson(query): AppJson<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    validate(&query)?;
    Ok(Json(state.job_search.search(&query).await))
}

/// POST /search
///
/// Legacy endpoint: same search, returning only the job array.
pub async fn handle_legacy_search(
    State(state): State<AppState>,
    AppJson(query): AppJson<SearchQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    validate(&query)?;
    Ok(Json(state.job_search.search(&query).await.jobs))
}
