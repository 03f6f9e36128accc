//! Job search orchestration: external provider first, built-in catalog as fallback.
//!
//! The catalog is used when no provider is configured, when the provider call fails,
//! or when it returns no postings. `search` itself never fails.

use std::sync::Arc;

use tracing::{info, warn};

use crate::jobs::engine::JobRelevanceEngine;
use crate::jobs::models::{FallbackReason, ResultSource, SearchQuery, SearchResponse};
use crate::jobs::provider::JobSearchProvider;

pub struct JobSearchService {
    provider: Option<Arc<dyn JobSearchProvider>>,
    engine: JobRelevanceEngine,
}

impl JobSearchService {
    pub fn new(provider: Option<Arc<dyn JobSearchProvider>>, engine: JobRelevanceEngine) -> Self {
        Self { provider, engine }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn search(&self, query: &SearchQuery) -> SearchResponse {
        let Some(provider) = &self.provider else {
            info!("No search provider configured, serving catalog results");
            return self.fallback(query, FallbackReason::NotConfigured);
        };

        match provider.search(query).await {
            Ok(jobs) if !jobs.is_empty() => SearchResponse {
                total_matched: jobs.len(),
                page_size: jobs.len(),
                jobs,
                start: query.start,
                source: ResultSource::Provider,
                fallback_reason: None,
            },
            Ok(_) => {
                info!(query = %query.query, "Search provider returned no results, using catalog");
                self.fallback(query, FallbackReason::NoResults)
            }
            Err(e) => {
                warn!(error = %e, query = %query.query, "Search provider failed, using catalog");
                self.fallback(query, FallbackReason::ProviderError)
            }
        }
    }

    fn fallback(&self, query: &SearchQuery, reason: FallbackReason) -> SearchResponse {
        let page = self.engine.rank_and_filter(query);
        SearchResponse {
            jobs: page.jobs,
            total_matched: page.total_matched,
            start: query.start,
            page_size: self.engine.policy().page_size,
            source: ResultSource::Catalog,
            fallback_reason: Some(reason),
        }
    }
}
