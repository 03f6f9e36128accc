//! Job Relevance Engine: scores, filters, sorts and paginates the built-in catalog.
//!
//! Pipeline per query:
//! 1. Relevance scoring (skipped for a blank query)
//! 2. Keep only positive scores, unless fewer than `min_relevance_matches` score
//!    above zero, in which case the full catalog is kept
//! 3. Optional re-sort by recency label or salary label
//! 4. Platform filter, committed only if it keeps at least `min_platform_matches`
//! 5. Fixed-size page from the 1-indexed `start`
//!
//! The engine never fails. Every sort is stable, so catalog order breaks ties.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::jobs::catalog::{Catalog, CatalogJob};
use crate::jobs::models::{JobPosting, SearchQuery, SortBy};
use crate::jobs::ranking::{
    parse_salary_floor, recency_rank, relevance_score, QueryTerms, RelevanceWeights,
};

/// Tuning knobs for catalog search. Defaults are 10 / 2 / 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    pub page_size: usize,
    /// Relevance filtering is abandoned when fewer entries than this score above zero.
    pub min_relevance_matches: usize,
    /// Platform filtering is abandoned when it would keep fewer entries than this.
    pub min_platform_matches: usize,
    pub weights: RelevanceWeights,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            page_size: 10,
            min_relevance_matches: 2,
            min_platform_matches: 1,
            weights: RelevanceWeights::default(),
        }
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPage {
    pub jobs: Vec<JobPosting>,
    /// Size of the candidate set before pagination.
    pub total_matched: usize,
}

#[derive(Debug, Clone)]
pub struct JobRelevanceEngine {
    catalog: Arc<Catalog>,
    policy: SearchPolicy,
}

impl JobRelevanceEngine {
    pub fn new(catalog: Arc<Catalog>, policy: SearchPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    pub fn rank_and_filter(&self, query: &SearchQuery) -> RankedPage {
        let candidates = self.candidates(query);
        let total_matched = candidates.len();

        let start_index = (query.start.max(1) - 1) as usize;
        let location = query.location();
        let jobs = candidates
            .into_iter()
            .skip(start_index)
            .take(self.policy.page_size)
            .map(|job| job.to_posting(location))
            .collect();

        RankedPage {
            jobs,
            total_matched,
        }
    }

    /// The ordered candidate set before pagination (steps 1 to 4).
    pub fn candidates(&self, query: &SearchQuery) -> Vec<&CatalogJob> {
        let mut candidates = self.relevance_candidates(query);

        match query.sort_by {
            SortBy::Relevance => {}
            SortBy::Date => {
                candidates
                    .sort_by_key(|job| Reverse(recency_rank(job.posted_date.as_deref())));
            }
            SortBy::Salary => {
                candidates.sort_by(|a, b| {
                    parse_salary_floor(b.salary.as_deref())
                        .total_cmp(&parse_salary_floor(a.salary.as_deref()))
                });
            }
        }

        self.apply_platform_filter(candidates, query)
    }

    fn relevance_candidates(&self, query: &SearchQuery) -> Vec<&CatalogJob> {
        let all: Vec<&CatalogJob> = self.catalog.jobs().iter().collect();

        let Some(terms) = QueryTerms::from_query(query, &self.policy.weights) else {
            return all;
        };

        let mut scored: Vec<(u32, &CatalogJob)> = all
            .iter()
            .map(|job| (relevance_score(job, &terms, &self.policy.weights), *job))
            .filter(|(score, _)| *score > 0)
            .collect();

        if scored.len() < self.policy.min_relevance_matches {
            tracing::debug!(
                matched = scored.len(),
                threshold = self.policy.min_relevance_matches,
                "Too few relevance matches, keeping full catalog"
            );
            return all;
        }

        scored.sort_by_key(|(score, _)| Reverse(*score));
        scored.into_iter().map(|(_, job)| job).collect()
    }

    fn apply_platform_filter<'a>(
        &self,
        candidates: Vec<&'a CatalogJob>,
        query: &SearchQuery,
    ) -> Vec<&'a CatalogJob> {
        let Some(platforms) = query.platform_filter() else {
            return candidates;
        };

        let wanted: Vec<String> = platforms
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        let narrowed: Vec<&CatalogJob> = candidates
            .iter()
            .copied()
            .filter(|job| {
                let source = job.source.to_lowercase();
                wanted.iter().any(|p| source.contains(p.as_str()))
            })
            .collect();

        if narrowed.is_empty() || narrowed.len() < self.policy.min_platform_matches {
            tracing::debug!(
                matched = narrowed.len(),
                threshold = self.policy.min_platform_matches,
                "Platform filter too narrow, keeping broader set"
            );
            return candidates;
        }

        narrowed
    }
}
