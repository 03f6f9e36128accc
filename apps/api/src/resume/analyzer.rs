//! Resume Text Scorer: ATS-style heuristic score (0 to 100) over extracted resume text.
//!
//! Every rule is evaluated independently and contributes points plus, when it falls
//! short, a human-readable note. Rules:
//!
//! | Rule                | Points                       |
//! |---------------------|------------------------------|
//! | email present       | 5                            |
//! | phone present       | 5                            |
//! | section keywords    | 10 per section (4 sections)  |
//! | word count          | 20 / 15 / 10 / 5             |
//! | impact keywords     | 15 / 10 / 0                  |
//! | text extracted      | 15                           |

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_SCORE: u32 = 100;
const CONTACT_POINTS: u32 = 5;
const SECTION_POINTS: u32 = 10;
const EXTRACTION_POINTS: u32 = 15;

const SECTIONS: &[(&str, &[&str])] = &[
    ("experience", &["experience", "work history", "employment"]),
    (
        "education",
        &["education", "academic", "university", "college", "school"],
    ),
    (
        "skills",
        &["skills", "technologies", "technical proficiency", "competencies"],
    ),
    ("projects", &["projects", "personal projects", "portfolio"]),
];

/// (exclusive lower bound on word count, points, note). Checked in order.
const WORD_COUNT_TIERS: &[(usize, u32, Option<&str>)] = &[
    (1000, 20, None),
    (400, 15, None),
    (200, 10, Some("Resume is a bit short, aim for 400+ words")),
];
const SHORT_RESUME_POINTS: u32 = 5;
const SHORT_RESUME_NOTE: &str = "Resume is too short, add more details";

const IMPACT_KEYWORDS: &[&str] = &[
    "%",
    "$",
    "increased",
    "decreased",
    "improved",
    "reduced",
    "led",
    "managed",
    "developed",
    "created",
];

/// (minimum distinct impact keywords, points, note). Checked in order.
const IMPACT_TIERS: &[(usize, u32, Option<&str>)] = &[
    (5, 15, None),
    (2, 10, Some("Use more action verbs and metrics (e.g. %, $)")),
];
const NO_IMPACT_NOTE: &str = "Add measurable results (numbers, metrics) to your experience";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleResult {
    pub rule: String,
    pub points: u32,
    pub max_points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// 0 to 100
    pub score: u32,
    /// Improvement notes for every rule that fell short.
    pub breakdown: Vec<String>,
    pub checks: Vec<RuleResult>,
    pub word_count: usize,
    pub analyzed_at: DateTime<Utc>,
}

pub struct ResumeTextScorer {
    email: Regex,
    phone: Regex,
}

impl Default for ResumeTextScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeTextScorer {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern is valid"),
            phone: Regex::new(r"\d{10}|\d{3}[-.\s]\d{3}[-.\s]\d{4}").expect("phone pattern is valid"),
        }
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        let text_lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();

        let mut checks = Vec::new();
        let mut breakdown = Vec::new();
        let mut record = |rule: &str, points: u32, max_points: u32, note: Option<String>| {
            checks.push(RuleResult {
                rule: rule.to_string(),
                points,
                max_points,
            });
            breakdown.extend(note);
        };

        let has_email = self.email.is_match(text);
        record(
            "email",
            if has_email { CONTACT_POINTS } else { 0 },
            CONTACT_POINTS,
            (!has_email).then(|| "Missing email address".to_string()),
        );

        let has_phone = self.phone.is_match(text);
        record(
            "phone",
            if has_phone { CONTACT_POINTS } else { 0 },
            CONTACT_POINTS,
            (!has_phone).then(|| "Missing phone number".to_string()),
        );

        for (section, keywords) in SECTIONS {
            let present = keywords.iter().any(|k| text_lower.contains(k));
            record(
                *section,
                if present { SECTION_POINTS } else { 0 },
                SECTION_POINTS,
                (!present).then(|| format!("Missing '{}' section", capitalize(section))),
            );
        }

        let (points, note) = word_count_points(word_count);
        record("word_count", points, WORD_COUNT_TIERS[0].1, note.map(String::from));

        let impact_count = IMPACT_KEYWORDS
            .iter()
            .filter(|k| text_lower.contains(*k))
            .count();
        let (points, note) = impact_points(impact_count);
        record("impact", points, IMPACT_TIERS[0].1, note.map(String::from));

        record("extraction", EXTRACTION_POINTS, EXTRACTION_POINTS, None);

        let score = checks.iter().map(|c| c.points).sum::<u32>().min(MAX_SCORE);

        ResumeAnalysis {
            score,
            breakdown,
            checks,
            word_count,
            analyzed_at: Utc::now(),
        }
    }
}

fn word_count_points(word_count: usize) -> (u32, Option<&'static str>) {
    WORD_COUNT_TIERS
        .iter()
        .find(|(threshold, _, _)| word_count > *threshold)
        .map(|(_, points, note)| (*points, *note))
        .unwrap_or((SHORT_RESUME_POINTS, Some(SHORT_RESUME_NOTE)))
}

fn impact_points(distinct_keywords: usize) -> (u32, Option<&'static str>) {
    IMPACT_TIERS
        .iter()
        .find(|(minimum, _, _)| distinct_keywords >= *minimum)
        .map(|(_, points, note)| (*points, *note))
        .unwrap_or((0, Some(NO_IMPACT_NOTE)))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
