//! Role inference from cleaned resume text.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::title_case;

/// Role phrases as authored. Searched longest first (see [`ROLE_KEYWORDS`]).
const ROLE_PHRASES: &[&str] = &[
    "software engineer",
    "software developer",
    "backend developer",
    "frontend developer",
    "fullstack developer",
    "full stack developer",
    "full-stack developer",
    "data scientist",
    "data analyst",
    "data engineer",
    "machine learning engineer",
    "devops engineer",
    "cloud engineer",
    "network engineer",
    "security engineer",
    "embedded systems engineer",
    "mechanical engineer",
    "civil engineer",
    "electrical engineer",
    "qa engineer",
    "qa tester",
    "test engineer",
    "automation engineer",
    "business analyst",
    "systems analyst",
    "database administrator",
    "system administrator",
    "cloud architect",
    "solutions architect",
    "ui/ux designer",
    "ui designer",
    "ux designer",
    "product manager",
    "project manager",
    "scrum master",
    "developer",
    "engineer",
    "analyst",
    "designer",
    "manager",
    "consultant",
    "architect",
    "administrator",
    "scientist",
    "tester",
    "devops",
    "backend",
    "frontend",
    "fullstack",
    "full stack",
    "software",
    "mechanical",
    "civil",
    "electrical",
    "embedded",
    "cloud",
    "network",
    "security",
    "qa",
    "data",
];

/// Longest phrase first; the sort is stable so equal lengths keep authored order.
static ROLE_KEYWORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keywords = ROLE_PHRASES.to_vec();
    keywords.sort_by_key(|keyword| Reverse(keyword.len()));
    keywords
});

// A header cue, then a short snippet up to the next sentence boundary.
static SECTION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:objective|summary|desired role|applying for|position|career objective)[\s:]*(.{5,120}?)(?:\.|,|;|\n|$)",
    )
    .unwrap()
});

type RoleStrategy = fn(&str) -> Option<&'static str>;

/// Header snippets first, then the whole text.
const ROLE_STRATEGIES: [(&str, RoleStrategy); 2] = [
    ("section header", role_near_section_header),
    ("full-text scan", role_anywhere),
];

/// Most likely role, title-cased, or `None` when no keyword appears.
pub fn infer_role(text: &str) -> Option<String> {
    let text = text.to_lowercase();
    for (name, strategy) in ROLE_STRATEGIES {
        if let Some(keyword) = strategy(&text) {
            let role = title_case(keyword);
            debug!("Role detected via {name}: {role}");
            return Some(role);
        }
    }
    debug!("No parsed role detected");
    None
}

fn first_keyword_in(haystack: &str) -> Option<&'static str> {
    ROLE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| haystack.contains(keyword))
}

fn role_near_section_header(text: &str) -> Option<&'static str> {
    SECTION_HEADER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find_map(|snippet| first_keyword_in(snippet.as_str()))
}

fn role_anywhere(text: &str) -> Option<&'static str> {
    first_keyword_in(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_sorted_longest_first() {
        for pair in ROLE_KEYWORDS.windows(2) {
            assert!(pair[0].len() >= pair[1].len(), "{pair:?}");
        }
        assert_eq!(ROLE_KEYWORDS.len(), ROLE_PHRASES.len());
    }

    #[test]
    fn test_equal_lengths_keep_authored_order() {
        let pos = |kw: &str| ROLE_KEYWORDS.iter().position(|k| *k == kw).unwrap();
        // Both 20 characters; "full stack developer" is authored first.
        assert!(pos("full stack developer") < pos("full-stack developer"));
        assert!(pos("full-stack developer") < pos("system administrator"));
    }

    #[test]
    fn test_specific_phrase_beats_generic_word() {
        let role = infer_role("senior full stack developer with react and node experience");
        assert_eq!(role.as_deref(), Some("Full Stack Developer"));
    }

    #[test]
    fn test_section_header_snippet_wins_over_earlier_text() {
        // The full-text scan would pick "software engineer" (longer) first.
        let text = "worked alongside a software engineer team. objective: data analyst role, sql";
        assert_eq!(infer_role(text).as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn test_near_objective() {
        let role = infer_role("objective: seeking a position as backend developer with 3 years");
        assert_eq!(role.as_deref(), Some("Backend Developer"));
    }

    #[test]
    fn test_career_objective_applying_for() {
        let role = infer_role("career objective: applying for data analyst position. sql, power bi.");
        assert_eq!(role.as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn test_full_text_scan() {
        let role = infer_role("john smith software engineer 5 years experience python django");
        assert_eq!(role.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_summary_header() {
        let role = infer_role("summary: 5 years experience as mechanical engineer in manufacturing sector");
        assert_eq!(role.as_deref(), Some("Mechanical Engineer"));
    }

    #[test]
    fn test_position_header_qa() {
        let role = infer_role("position: qa engineer. skills: selenium, core java, postman");
        assert_eq!(role.as_deref(), Some("Qa Engineer"));
    }

    #[test]
    fn test_slash_role_title_cased() {
        let role = infer_role("desired role: ui/ux designer; figma");
        assert_eq!(role.as_deref(), Some("Ui/Ux Designer"));
    }

    #[test]
    fn test_no_role_returns_none() {
        assert_eq!(infer_role("hobbies: cricket, chess, reading. education: high school 2020."), None);
        assert_eq!(infer_role(""), None);
    }

    #[test]
    fn test_header_without_keyword_falls_back_to_full_text() {
        let text = "summary: motivated self-starter, python. worked as a tester";
        assert_eq!(role_near_section_header(text), None);
        assert_eq!(infer_role(text).as_deref(), Some("Tester"));
    }

    #[test]
    fn test_snippet_needs_five_characters() {
        // "qa" alone is too short, so the snippet runs past the first period.
        let text = "summary: qa. hands-on tester of web apps";
        assert_eq!(role_near_section_header(text), Some("tester"));
    }
}
