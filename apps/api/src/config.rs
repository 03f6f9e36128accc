use anyhow::{Context, Result};

use crate::jobs::engine::SearchPolicy;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Custom Search credentials. The external provider is disabled unless both are set.
    pub google_api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub search_timeout_secs: u64,
    pub search_policy: SearchPolicy,
    pub resume_max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SearchPolicy::default();
        let search_policy = SearchPolicy {
            page_size: parse_env("SEARCH_PAGE_SIZE", defaults.page_size)?.max(1),
            min_relevance_matches: parse_env(
                "SEARCH_MIN_RELEVANCE_MATCHES",
                defaults.min_relevance_matches,
            )?,
            min_platform_matches: parse_env(
                "SEARCH_MIN_PLATFORM_MATCHES",
                defaults.min_platform_matches,
            )?,
            weights: defaults.weights,
        };

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            google_api_key: optional_env("GOOGLE_API_KEY"),
            search_engine_id: optional_env("SEARCH_ENGINE_ID"),
            search_timeout_secs: parse_env("SEARCH_TIMEOUT_SECS", 15)?,
            search_policy,
            resume_max_upload_bytes: parse_env("RESUME_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }

    /// Returns the provider credentials only when both halves are configured.
    pub fn search_credentials(&self) -> Option<(&str, &str)> {
        match (&self.google_api_key, &self.search_engine_id) {
            (Some(key), Some(cx)) => Some((key.as_str(), cx.as_str())),
            _ => None,
        }
    }
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
