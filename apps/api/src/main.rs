mod config;
mod errors;
mod jobs;
mod resume;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::catalog::Catalog;
use crate::jobs::engine::JobRelevanceEngine;
use crate::jobs::provider::{GoogleSearchProvider, JobSearchProvider};
use crate::jobs::service::JobSearchService;
use crate::resume::analyzer::ResumeTextScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(Catalog::builtin());
    if catalog.is_empty() {
        warn!("Job catalog is empty, fallback searches will return no postings");
    } else {
        info!("Job catalog loaded ({} postings)", catalog.len());
    }

    let engine = JobRelevanceEngine::new(catalog, config.search_policy.clone());

    let provider: Option<Arc<dyn JobSearchProvider>> = match config.search_credentials() {
        Some((api_key, engine_id)) => {
            let provider = GoogleSearchProvider::new(
                api_key.to_string(),
                engine_id.to_string(),
                Duration::from_secs(config.search_timeout_secs),
            )?;
            info!("External search provider enabled");
            Some(Arc::new(provider))
        }
        None => {
            warn!("GOOGLE_API_KEY or SEARCH_ENGINE_ID not set, serving catalog results only");
            None
        }
    };

    let job_search = Arc::new(JobSearchService::new(provider, engine));
    info!(provider_enabled = job_search.has_provider(), "Job search service ready");

    let state = AppState {
        config: config.clone(),
        job_search,
        resume_scorer: Arc::new(ResumeTextScorer::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
