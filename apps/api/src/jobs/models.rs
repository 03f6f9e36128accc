use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform value that disables platform filtering.
pub const ALL_PLATFORMS: &str = "All";

/// A single job posting as returned to clients, from either the external
/// provider or the built-in catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub source: String,
    /// Human-readable recency label such as "2 days ago". Not a timestamp.
    pub posted_date: Option<String>,
    /// Free-text salary range, currency unnormalized.
    pub salary: Option<String>,
}

impl JobPosting {
    /// Stable id derived from the posting URL so repeated searches serialize identically.
    pub fn id_for_url(url: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Salary,
}

fn default_start() -> u32 {
    1
}

/// Per-request search parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub location: Option<String>,
    /// 1-indexed offset into the result set.
    #[serde(default = "default_start")]
    pub start: u32,
    pub experience_level: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    /// Only used to refine the external provider's query text.
    pub company_size: Option<Vec<String>>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start: 1,
            ..Default::default()
        }
    }

    /// Location with blank values treated as absent.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Requested platform tags, or `None` when platform filtering is disabled.
    pub fn platform_filter(&self) -> Option<&[String]> {
        match self.platforms.as_deref() {
            Some(platforms)
                if !platforms.is_empty()
                    && !platforms
                        .iter()
                        .any(|p| p.trim().eq_ignore_ascii_case(ALL_PLATFORMS)) =>
            {
                Some(platforms)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Provider,
    Catalog,
}

/// Why the catalog was used instead of the external provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NotConfigured,
    ProviderError,
    NoResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobPosting>,
    pub total_matched: usize,
    pub start: u32,
    pub page_size: usize,
    pub source: ResultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
}
