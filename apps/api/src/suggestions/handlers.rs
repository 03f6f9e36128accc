use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::{AppError, AppJson};
use crate::suggestions::autocomplete::{suggest, SuggestionKind};
use crate::suggestions::notifications::{build_notifications, Notification, NotificationRequest};
use crate::suggestions::recommend::{recommend, RecommendationRequest, SkillRecommendation};

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub query: String,
}

/// GET /api/v1/suggestions?type=<kind>&query=<text>
pub async fn handle_suggestions(Query(params): Query<SuggestionParams>) -> Json<Vec<&'static str>> {
    let results = SuggestionKind::parse(&params.kind)
        .map(|kind| suggest(kind, &params.query))
        .unwrap_or_default();
    Json(results)
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    AppJson(request): AppJson<RecommendationRequest>,
) -> Result<Json<Vec<SkillRecommendation>>, AppError> {
    Ok(Json(recommend(&request)))
}

/// POST /api/v1/notifications
///
/// Builds the notification feed for the submitted profile.
pub async fn handle_notifications(
    AppJson(request): AppJson<NotificationRequest>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let feed = build_notifications(&request);
    tracing::debug!(count = feed.len(), "Notification feed built");
    Ok(Json(feed))
}
