//! External job search provider backed by the Custom Search JSON API.
//!
//! The provider is best-effort: any failure is reported as a `ProviderError` and the
//! search service falls back to the built-in catalog. Nothing here retries.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::jobs::models::{JobPosting, SearchQuery};

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
/// The API caps `num` at 10.
const RESULTS_PER_REQUEST: u32 = 10;
pub const PROVIDER_SOURCE: &str = "Google Search";
const UNKNOWN_COMPANY: &str = "Unknown";
const UNSPECIFIED_LOCATION: &str = "Not specified";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A source of live job postings. Carried by the search service as `Arc<dyn JobSearchProvider>`.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

#[derive(Clone)]
pub struct GoogleSearchProvider {
    client: Client,
    api_key: String,
    engine_id: String,
}

impl GoogleSearchProvider {
    pub fn new(api_key: String, engine_id: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            engine_id,
        })
    }
}

#[async_trait]
impl JobSearchProvider for GoogleSearchProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError> {
        let q = build_query_text(query);
        debug!(query = %q, start = query.start, "Calling search provider");

        let response = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", q.as_str()),
            ])
            .query(&[("num", RESULTS_PER_REQUEST), ("start", query.start.max(1))])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed = parse_response(&body, query)?;
        debug!(count = parsed.len(), "Search provider returned postings");
        Ok(parsed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Query construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the free-text query: `<query> jobs [location] [(exp OR ..)] [(size OR ..)] [(site:.. OR ..)]`.
pub fn build_query_text(query: &SearchQuery) -> String {
    let mut terms: Vec<String> = Vec::new();

    let text = query.query.trim();
    if !text.is_empty() {
        terms.push(text.to_string());
    }
    terms.push("jobs".to_string());

    if let Some(location) = query.location() {
        terms.push(location.to_string());
    }

    if let Some(group) = or_group(query.experience_level.iter().flatten().map(String::as_str)) {
        terms.push(group);
    }

    if let Some(group) = or_group(
        query
            .company_size
            .iter()
            .flatten()
            .map(|s| company_size_keyword(s)),
    ) {
        terms.push(group);
    }

    if let Some(platforms) = query.platform_filter() {
        if let Some(group) = or_group(platforms.iter().filter_map(|p| site_filter(p))) {
            terms.push(group);
        }
    }

    terms.join(" ")
}

fn or_group<'a>(parts: impl Iterator<Item = &'a str>) -> Option<String> {
    let parts: Vec<&str> = parts.map(str::trim).filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("({})", parts.join(" OR ")))
    }
}

fn company_size_keyword(size: &str) -> &str {
    match size {
        "Small" => "Small company",
        "Mid-size" => "Mid-size company",
        "Large" => "Large company",
        other => other,
    }
}

/// Known job boards map to a `site:` restriction; other platform tags are dropped.
fn site_filter(platform: &str) -> Option<&'static str> {
    match platform.trim().to_lowercase().as_str() {
        "linkedin" => Some("site:linkedin.com"),
        "glassdoor" => Some("site:glassdoor.com"),
        "indeed" => Some("site:indeed.com"),
        "naukri" => Some("site:naukri.com"),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

fn parse_response(body: &str, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError> {
    let response: CustomSearchResponse = serde_json::from_str(body)?;
    let location = query.location().unwrap_or(UNSPECIFIED_LOCATION);

    Ok(response
        .items
        .into_iter()
        .filter(|item| !item.link.is_empty())
        .map(|item| {
            let (title, company) = split_title(&item.title);
            JobPosting {
                id: JobPosting::id_for_url(&item.link),
                title,
                company,
                location: location.to_string(),
                salary: extract_salary(&item.snippet),
                posted_date: extract_posted_date(&item.snippet),
                description: item.snippet,
                url: item.link,
                source: PROVIDER_SOURCE.to_string(),
            }
        })
        .collect())
}

/// Result titles usually read "Role - Company" or "Role | Company".
fn split_title(raw: &str) -> (String, String) {
    let raw = raw.trim();
    let split = raw.rsplit_once(" - ").or_else(|| raw.rsplit_once('|'));
    match split {
        Some((title, company)) if !title.trim().is_empty() && !company.trim().is_empty() => {
            (title.trim().to_string(), company.trim().to_string())
        }
        _ => {
            let title = if raw.is_empty() { "Unknown Job" } else { raw };
            (title.to_string(), UNKNOWN_COMPANY.to_string())
        }
    }
}

fn salary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)[$₹€£]\s?\d[\d,]*(?:\.\d+)?(?:\s?k\b)?(?:\s?(?:-|–|to)\s?[$₹€£]?\s?\d[\d,]*(?:\.\d+)?(?:\s?k\b)?)?|\d+(?:\.\d+)?(?:\s?-\s?\d+(?:\.\d+)?)?\s?LPA\b",
        )
        .expect("salary pattern is valid")
    })
}

fn posted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:\d+\+?\s*(?:hour|day|week|month)s?\s+ago|just posted|today|yesterday)\b")
            .expect("posted-date pattern is valid")
    })
}

/// First salary-looking fragment in a result snippet.
pub fn extract_salary(snippet: &str) -> Option<String> {
    salary_regex()
        .find(snippet)
        .map(|m| m.as_str().trim().to_string())
}

/// First recency-looking fragment in a result snippet.
pub fn extract_posted_date(snippet: &str) -> Option<String> {
    posted_regex()
        .find(snippet)
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "kind": "customsearch#search",
        "items": [
            {
                "title": "Senior Rust Engineer - Ferrous Co",
                "link": "https://jobs.example.com/rust-1",
                "snippet": "Posted 3 days ago. Salary $140k - $170k. Build storage engines."
            },
            {
                "title": "Data Analyst | Retail Insights",
                "link": "https://jobs.example.com/analyst",
                "snippet": "CTC 6 - 9 LPA. Freshers welcome. 5 hours ago"
            },
            {
                "title": "Careers",
                "link": "https://jobs.example.com/careers",
                "snippet": "Join us"
            },
            {
                "title": "Broken",
                "snippet": "no link"
            }
        ]
    }"#;

    #[test]
    fn test_query_text_minimal() {
        assert_eq!(build_query_text(&SearchQuery::new("rust developer")), "rust developer jobs");
    }

    #[test]
    fn test_query_text_blank_query_starts_with_jobs() {
        assert_eq!(build_query_text(&SearchQuery::new("  ")), "jobs");
    }

    #[test]
    fn test_query_text_full() {
        let mut q = SearchQuery::new("Frontend Developer");
        q.location = Some("Bangalore".to_string());
        q.experience_level = Some(vec!["Fresher".to_string(), "Associate".to_string()]);
        q.company_size = Some(vec!["Startup".to_string(), "Mid-size".to_string()]);
        q.platforms = Some(vec!["LinkedIn".to_string(), "Wellfound".to_string(), "naukri".to_string()]);
        assert_eq!(
            build_query_text(&q),
            "Frontend Developer jobs Bangalore (Fresher OR Associate) \
             (Startup OR Mid-size company) (site:linkedin.com OR site:naukri.com)"
        );
    }

    #[test]
    fn test_query_text_all_platforms_adds_no_sites() {
        let mut q = SearchQuery::new("qa");
        q.platforms = Some(vec!["All".to_string(), "LinkedIn".to_string()]);
        assert_eq!(build_query_text(&q), "qa jobs");
    }

    #[test]
    fn test_split_title_dash_uses_last_segment() {
        assert_eq!(
            split_title("Engineer - Platform - Acme"),
            ("Engineer - Platform".to_string(), "Acme".to_string())
        );
    }

    #[test]
    fn test_split_title_pipe_and_unknown() {
        assert_eq!(
            split_title("Analyst | Acme"),
            ("Analyst".to_string(), "Acme".to_string())
        );
        assert_eq!(
            split_title("Careers"),
            ("Careers".to_string(), "Unknown".to_string())
        );
    }

    #[test]
    fn test_parse_response_maps_items() {
        let mut q = SearchQuery::new("rust");
        q.location = Some("Berlin".to_string());
        let jobs = parse_response(FIXTURE, &q).unwrap();

        assert_eq!(jobs.len(), 3, "items without a link are skipped");
        assert_eq!(jobs[0].title, "Senior Rust Engineer");
        assert_eq!(jobs[0].company, "Ferrous Co");
        assert_eq!(jobs[0].location, "Berlin");
        assert_eq!(jobs[0].source, PROVIDER_SOURCE);
        assert_eq!(jobs[0].salary.as_deref(), Some("$140k - $170k"));
        assert_eq!(jobs[0].posted_date.as_deref(), Some("3 days ago"));

        assert_eq!(jobs[1].company, "Retail Insights");
        assert_eq!(jobs[1].salary.as_deref(), Some("6 - 9 LPA"));
        assert_eq!(jobs[1].posted_date.as_deref(), Some("5 hours ago"));

        assert_eq!(jobs[2].company, "Unknown");
        assert!(jobs[2].salary.is_none());
        assert!(jobs[2].posted_date.is_none());
    }

    #[test]
    fn test_parse_response_without_items_is_empty() {
        let jobs = parse_response(r#"{"kind": "customsearch#search"}"#, &SearchQuery::new("x")).unwrap();
        assert!(jobs.is_empty());
        assert_eq!(
            parse_response("{}", &SearchQuery::new("x")).unwrap().len(),
            0
        );
    }

    #[test]
    fn test_parse_response_rejects_malformed_json() {
        let err = parse_response("<html>", &SearchQuery::new("x")).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn test_parse_response_location_defaults() {
        let jobs = parse_response(FIXTURE, &SearchQuery::new("rust")).unwrap();
        assert_eq!(jobs[0].location, "Not specified");
    }

    #[test]
    fn test_extract_salary_variants() {
        assert_eq!(extract_salary("Pays $95,000 - $120,000 a year").as_deref(), Some("$95,000 - $120,000"));
        assert_eq!(extract_salary("€60k to €75k").as_deref(), Some("€60k to €75k"));
        assert_eq!(extract_salary("CTC 12 LPA").as_deref(), Some("12 LPA"));
        assert_eq!(extract_salary("Great benefits"), None);
    }

    #[test]
    fn test_extract_posted_date_variants() {
        assert_eq!(extract_posted_date("Posted 1 hour ago").as_deref(), Some("1 hour ago"));
        assert_eq!(extract_posted_date("30+ days ago · Apply").as_deref(), Some("30+ days ago"));
        assert_eq!(extract_posted_date("Just posted!").as_deref(), Some("Just posted"));
        assert_eq!(extract_posted_date("Apply now"), None);
    }
}
