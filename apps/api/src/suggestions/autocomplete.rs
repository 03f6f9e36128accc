use crate::suggestions::lists;

pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Job,
    Location,
    Skill,
    University,
    Company,
    Degree,
    Field,
}

impl SuggestionKind {
    /// Unrecognised kinds map to `None` rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "job" => Some(Self::Job),
            "location" => Some(Self::Location),
            "skill" => Some(Self::Skill),
            "university" => Some(Self::University),
            "company" => Some(Self::Company),
            "degree" => Some(Self::Degree),
            "field" => Some(Self::Field),
            _ => None,
        }
    }

    fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::Job => lists::JOB_TITLES,
            Self::Location => lists::LOCATIONS,
            Self::Skill => lists::SKILLS,
            Self::University => lists::UNIVERSITIES,
            Self::Company => lists::COMPANIES,
            Self::Degree => lists::DEGREES,
            Self::Field => lists::FIELDS_OF_STUDY,
        }
    }
}

/// Case-insensitive substring matches in vocabulary order, capped at
/// [`MAX_SUGGESTIONS`]. An empty query matches everything.
pub fn suggest(kind: SuggestionKind, query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    kind.vocabulary()
        .iter()
        .copied()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(SuggestionKind::parse("job"), Some(SuggestionKind::Job));
        assert_eq!(SuggestionKind::parse(" Skill "), Some(SuggestionKind::Skill));
        assert_eq!(SuggestionKind::parse("planet"), None);
    }

    #[test]
    fn test_matches_are_case_insensitive_and_ordered() {
        let results = suggest(SuggestionKind::Job, "DEVELOPER");
        assert_eq!(
            results,
            vec![
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
                "Mobile Developer",
                "iOS Developer",
                "Android Developer",
            ]
        );
    }

    #[test]
    fn test_results_are_capped() {
        assert_eq!(suggest(SuggestionKind::Skill, "").len(), MAX_SUGGESTIONS);
        assert!(suggest(SuggestionKind::University, "iit").len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(suggest(SuggestionKind::Company, "zzzz").is_empty());
    }

    #[test]
    fn test_each_kind_has_vocabulary() {
        assert_eq!(suggest(SuggestionKind::Location, "remote"), vec!["Remote"]);
        assert_eq!(suggest(SuggestionKind::Degree, "mba"), vec!["MBA"]);
        assert_eq!(
            suggest(SuggestionKind::Field, "computer"),
            vec!["Computer Science", "Computer Engineering"]
        );
    }
}
