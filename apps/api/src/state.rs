use std::sync::Arc;

use crate::config::Config;
use crate::jobs::service::JobSearchService;
use crate::resume::analyzer::ResumeTextScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Provider-backed search with catalog fallback.
    pub job_search: Arc<JobSearchService>,
    pub resume_scorer: Arc<ResumeTextScorer>,
}
