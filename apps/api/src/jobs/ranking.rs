//! Ranking signals for catalog search: additive relevance, recency labels and salary labels.
//!
//! Recency and salary have no structured source fields, only free-text labels, so both
//! are ranked by explicit heuristics kept in this module where they can be tested and swapped.

use crate::jobs::catalog::CatalogJob;
use crate::jobs::models::SearchQuery;

// ────────────────────────────────────────────────────────────────────────────
// Relevance
// ────────────────────────────────────────────────────────────────────────────

/// Points awarded by each relevance rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceWeights {
    /// Whole query is a substring of the title.
    pub title_phrase: u32,
    /// Per query word (longer than `min_word_len`) found in the title.
    pub title_word: u32,
    /// Whole query is a substring of the description.
    pub description_phrase: u32,
    /// Whole query is a substring of the company name.
    pub company_phrase: u32,
    /// Per experience-level tag found in the title or description.
    pub experience_tag: u32,
    /// Words of this many characters or fewer are ignored.
    pub min_word_len: usize,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            title_phrase: 100,
            title_word: 50,
            description_phrase: 30,
            company_phrase: 20,
            experience_tag: 40,
            min_word_len: 2,
        }
    }
}

/// Lowercased query terms, prepared once per search.
#[derive(Debug, Clone)]
pub struct QueryTerms {
    pub phrase: String,
    pub words: Vec<String>,
    pub experience_tags: Vec<String>,
}

impl QueryTerms {
    /// Returns `None` when the query text is blank, in which case no scoring applies.
    pub fn from_query(query: &SearchQuery, weights: &RelevanceWeights) -> Option<Self> {
        let phrase = query.query.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }

        let words = phrase
            .split_whitespace()
            .filter(|w| w.chars().count() > weights.min_word_len)
            .map(String::from)
            .collect();

        // Blank tags would match every posting.
        let experience_tags = query
            .experience_level
            .iter()
            .flatten()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Some(Self {
            phrase,
            words,
            experience_tags,
        })
    }
}

/// Additive relevance score of one catalog entry. All matching is case-insensitive substring.
pub fn relevance_score(job: &CatalogJob, terms: &QueryTerms, weights: &RelevanceWeights) -> u32 {
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let company = job.company.to_lowercase();

    let mut score = 0;

    if title.contains(&terms.phrase) {
        score += weights.title_phrase;
    }

    score += terms
        .words
        .iter()
        .filter(|w| title.contains(w.as_str()))
        .count() as u32
        * weights.title_word;

    if description.contains(&terms.phrase) {
        score += weights.description_phrase;
    }

    if company.contains(&terms.phrase) {
        score += weights.company_phrase;
    }

    score += terms
        .experience_tags
        .iter()
        .filter(|t| title.contains(t.as_str()) || description.contains(t.as_str()))
        .count() as u32
        * weights.experience_tag;

    score
}

// ────────────────────────────────────────────────────────────────────────────
// Recency
// ────────────────────────────────────────────────────────────────────────────

/// Ordered recency table: the first fragment contained in a label decides its rank.
/// Labels matching nothing (or absent) rank 0.
pub const RECENCY_RANKS: &[(&str, u8)] = &[
    ("hour", 5),
    ("1 day", 4),
    ("2 day", 3),
    ("3 day", 2),
    ("week", 1),
];

pub fn recency_rank(posted_date: Option<&str>) -> u8 {
    let Some(label) = posted_date else {
        return 0;
    };
    let label = label.to_lowercase();
    RECENCY_RANKS
        .iter()
        .find(|(fragment, _)| label.contains(fragment))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

const CURRENCY_SYMBOLS: &[char] = &['$', '₹', '€', '£', '¥'];
const RANGE_SEPARATORS: &[char] = &['-', '–', '—'];

/// Best-effort lower bound of a free-text salary label.
///
/// Strips currency symbols and thousands separators, keeps the part before any range
/// separator, takes its first numeric token and expands a trailing `k` to thousands.
/// Unparsable or absent labels yield 0.
pub fn parse_salary_floor(salary: Option<&str>) -> f64 {
    let Some(label) = salary else {
        return 0.0;
    };

    let cleaned: String = label
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect::<String>()
        .to_lowercase();

    let floor = cleaned.split(RANGE_SEPARATORS).next().unwrap_or_default();

    let Some(start) = floor.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };
    let rest = &floor[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());

    let value: f64 = rest[..end].parse().unwrap_or(0.0);
    if rest[end..].trim_start().starts_with('k') {
        value * 1000.0
    } else {
        value
    }
}
