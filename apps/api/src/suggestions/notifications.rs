//! Profile-driven notification feed.
//!
//! Each rule inspects the submitted profile and contributes at most one card, always in
//! the same order: profile links, resume status, top skills, top skill recommendation,
//! job alerts.

use serde::{Deserialize, Serialize};

use crate::suggestions::recommend::{recommend, RecommendationRequest};

/// Scores at or above this are reported as a success.
const GOOD_RESUME_SCORE: u32 = 70;
const TOP_SKILLS_SHOWN: usize = 3;
const PROFILE_LINK: &str = "?modal=profile";
const RESUME_BUILDER_LINK: &str = "?modal=resume_builder";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(flatten)]
    pub profile: RecommendationRequest,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// A resume file is stored for the user, analyzed or not.
    #[serde(default)]
    pub has_resume: bool,
    #[serde(default)]
    pub resume_score: Option<u32>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Alert,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action_link: String,
}

impl Notification {
    fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        action_label: &str,
        action_link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            action_label: action_label.to_string(),
            action_link: action_link.into(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn first_non_blank(values: &[String]) -> Option<&str> {
    values.iter().map(|v| v.trim()).find(|v| !v.is_empty())
}

pub fn build_notifications(request: &NotificationRequest) -> Vec<Notification> {
    let profile = &request.profile;
    let mut feed = Vec::new();

    let missing: Vec<&str> = [
        ("LinkedIn", &request.linkedin_url),
        ("GitHub", &request.github_url),
    ]
    .into_iter()
    .filter(|(_, url)| is_blank(url))
    .map(|(name, _)| name)
    .collect();
    if !missing.is_empty() {
        feed.push(Notification::new(
            "profile-incomplete",
            NotificationKind::Alert,
            "Profile Incomplete",
            format!("Add {} to boost your profile visibility.", missing.join(", ")),
            "Update Profile",
            PROFILE_LINK,
        ));
    }

    feed.push(match request.resume_score {
        Some(score) => {
            let (kind, message) = if score >= GOOD_RESUME_SCORE {
                (NotificationKind::Success, "Your resume score is great!")
            } else {
                (NotificationKind::Alert, "Your resume needs some improvement.")
            };
            Notification::new(
                "resume-score",
                kind,
                format!("Resume Score: {score}/100"),
                message,
                "Analyze Again",
                RESUME_BUILDER_LINK,
            )
        }
        None if request.has_resume => Notification::new(
            "resume-analyze",
            NotificationKind::Info,
            "Analyze Your Resume",
            "You have a resume saved. Get an analysis score now.",
            "Analyze Now",
            RESUME_BUILDER_LINK,
        ),
        None => Notification::new(
            "resume-missing",
            NotificationKind::Info,
            "Upload Your Resume",
            "Upload your resume to your profile to get started.",
            "Upload Resume",
            PROFILE_LINK,
        ),
    });

    let top_skills: Vec<&str> = profile
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(TOP_SKILLS_SHOWN)
        .collect();
    if !top_skills.is_empty() {
        feed.push(Notification::new(
            "your-skills",
            NotificationKind::Success,
            "Your Top Skills",
            format!(
                "You are profiled as proficient in: {}. Jobs are recommended based on this.",
                top_skills.join(", ")
            ),
            "View Profile",
            PROFILE_LINK,
        ));
    }

    if let Some(top) = recommend(profile).into_iter().next() {
        feed.push(Notification::new(
            format!("skill-{}", top.skill),
            NotificationKind::Info,
            format!("Recommended Skill: {}", top.skill),
            top.reason,
            "Learn More",
            format!(
                "https://www.google.com/search?q=learn+{}",
                urlencoding::encode(&top.skill)
            ),
        ));
    }

    match (
        first_non_blank(&profile.job_preferences),
        first_non_blank(&request.preferred_locations),
    ) {
        (Some(role), Some(location)) => feed.push(Notification::new(
            "new-jobs",
            NotificationKind::Success,
            "New Jobs Found",
            format!("Browse the latest {role} jobs in {location}."),
            "View Jobs",
            format!(
                "/?q={}&location={}",
                urlencoding::encode(role),
                urlencoding::encode(location)
            ),
        )),
        (None, _) => feed.push(Notification::new(
            "add-pref",
            NotificationKind::Info,
            "Set Preferences",
            "Add job preferences to get personalized job alerts.",
            "Add Preference",
            PROFILE_LINK,
        )),
        // Preferences without a location get no alert card.
        (Some(_), None) => {}
    }

    feed
}
