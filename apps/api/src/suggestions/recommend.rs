//! Skill recommendations from a role → skills knowledge base.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::suggestions::lists::SKILL_KNOWLEDGE_BASE;

const FRESHER_LEVEL: &str = "Fresher";
const GENERAL_ROLE: &str = "General";
const FRESHER_BASICS: &[(&str, &str)] = &[
    ("Git", "Essential for all developers"),
    ("Communication", "Key soft skill"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_preferences: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillRecommendation {
    pub skill: String,
    pub role: String,
    pub reason: String,
}

/// A preference matches a role when either name contains the other, ignoring case.
fn preference_matches(preference: &str, role: &str) -> bool {
    let preference = preference.to_lowercase();
    let role = role.to_lowercase();
    role.contains(&preference) || preference.contains(&role)
}

/// Skills the user lacks for each role their preferences point at. Falls back to
/// general basics for freshers. Deduplicated by skill, first occurrence wins.
pub fn recommend(request: &RecommendationRequest) -> Vec<SkillRecommendation> {
    let known: HashSet<String> = request.skills.iter().map(|s| s.trim().to_lowercase()).collect();

    let mut recommendations = Vec::new();
    for preference in request.job_preferences.iter().map(|p| p.trim()) {
        if preference.is_empty() {
            continue;
        }
        for (role, skills) in SKILL_KNOWLEDGE_BASE {
            if !preference_matches(preference, role) {
                continue;
            }
            recommendations.extend(
                skills
                    .iter()
                    .filter(|skill| !known.contains(&skill.to_lowercase()))
                    .map(|skill| SkillRecommendation {
                        skill: skill.to_string(),
                        role: role.to_string(),
                        reason: format!("Recommended for {role} roles"),
                    }),
            );
        }
    }

    if recommendations.is_empty() && request.experience_level.as_deref() == Some(FRESHER_LEVEL) {
        recommendations.extend(FRESHER_BASICS.iter().map(|(skill, reason)| SkillRecommendation {
            skill: skill.to_string(),
            role: GENERAL_ROLE.to_string(),
            reason: reason.to_string(),
        }));
    }

    let mut seen = HashSet::new();
    recommendations.retain(|r| seen.insert(r.skill.clone()));
    recommendations
}
