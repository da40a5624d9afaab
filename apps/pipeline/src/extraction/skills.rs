//! Dictionary skill extraction.
//!
//! Text and vocabulary phrases go through the same tokenizer, so a phrase
//! matches wherever its token sequence appears contiguously in the text.

use std::collections::HashSet;

use tracing::debug;

use crate::extraction::vocabulary::SkillVocabulary;

/// A token and its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

// '+' and '#' keep c++ / c# whole, '.' keeps node.js and .net whole.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '_')
}

/// Words are runs of alphanumerics plus `+ # . _` with trailing periods split
/// off; any other non-space character is a token of its own.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(text, start, i, &mut tokens);
        }
        if !c.is_whitespace() {
            tokens.push(Token {
                text: &text[i..i + c.len_utf8()],
                start: i,
                end: i + c.len_utf8(),
            });
        }
    }
    if let Some(start) = word_start {
        push_word(text, start, text.len(), &mut tokens);
    }
    tokens
}

fn push_word<'a>(text: &'a str, start: usize, end: usize, tokens: &mut Vec<Token<'a>>) {
    let word = &text[start..end];
    let core_end = start + word.trim_end_matches('.').len();
    if core_end > start {
        tokens.push(Token {
            text: &text[start..core_end],
            start,
            end: core_end,
        });
    }
    for dot in core_end..end {
        tokens.push(Token {
            text: &text[dot..dot + 1],
            start: dot,
            end: dot + 1,
        });
    }
}

/// Lowercased token strings of a vocabulary phrase.
pub(crate) fn phrase_tokens(phrase: &str) -> Vec<String> {
    tokenize(phrase)
        .into_iter()
        .map(|t| t.text.to_lowercase())
        .collect()
}

/// Finds every vocabulary phrase in `text`, case-insensitively.
///
/// Matches are visited by start position, shorter phrases first, and each
/// resolves to the vocabulary's canonical casing. The result is deduplicated
/// by canonical string in first-occurrence order.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let tokens = tokenize(text);
    let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for start in 0..tokens.len() {
        for phrase in vocabulary.phrases_starting_with(&lowered[start]) {
            let end = start + phrase.len();
            if end > tokens.len() || lowered[start..end] != phrase[..] {
                continue;
            }

            let surface = &text[tokens[start].start..tokens[end - 1].end];
            let canonical = vocabulary
                .canonical(&surface.to_lowercase())
                .unwrap_or(surface)
                .to_string();
            if seen.insert(canonical.clone()) {
                skills.push(canonical);
            }
        }
    }

    debug!("Extracted {} skills: {:?}", skills.len(), skills);
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::from_lines([
            "Python",
            "SQL",
            "Django",
            "React",
            "Docker",
            "AWS",
            "Kubernetes",
            "REST API",
            "REST",
            "Power BI",
            "C++",
            "C#",
            "Node.js",
            ".NET",
            "CI/CD",
            "Machine Learning",
        ])
    }

    fn texts(tokens: &[Token<'_>]) -> Vec<String> {
        tokens.iter().map(|t| t.text.to_string()).collect()
    }

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens = tokenize("python, sql (django).");
        assert_eq!(texts(&tokens), ["python", ",", "sql", "(", "django", ")", "."]);
    }

    #[test]
    fn test_tokenize_keeps_symbol_words() {
        let tokens = tokenize("c++ c# node.js .net ci/cd");
        assert_eq!(texts(&tokens), ["c++", "c#", "node.js", ".net", "ci", "/", "cd"]);
    }

    #[test]
    fn test_tokenize_trailing_period_split() {
        let tokens = tokenize("used node.js.");
        assert_eq!(texts(&tokens), ["used", "node.js", "."]);
        assert_eq!(tokens[1].start, 5);
        assert_eq!(tokens[1].end, 12);
    }

    #[test]
    fn test_tokenize_splits_hyphen_and_apostrophe() {
        let tokens = tokenize("java-based python's");
        assert_eq!(texts(&tokens), ["java", "-", "based", "python", "'", "s"]);
    }

    #[test]
    fn test_hyphenated_and_possessive_words_match() {
        let vocab = SkillVocabulary::from_lines(["Java", "Python", "Scikit-learn"]);
        let skills = extract_skills("java-based services, python's ecosystem, scikit-learn", &vocab);
        assert_eq!(skills, ["Java", "Python", "Scikit-learn"]);
    }

    #[test]
    fn test_extracts_known_skills() {
        let skills = extract_skills("i have experience with python, django, and sql.", &vocab());
        assert_eq!(skills, ["Python", "Django", "SQL"]);
    }

    #[test]
    fn test_case_insensitive_with_canonical_casing() {
        let skills = extract_skills("Proficient in PYTHON and REACT and DOCKER", &vocab());
        assert_eq!(skills, ["Python", "React", "Docker"]);
    }

    #[test]
    fn test_deduplicates_first_occurrence() {
        let skills = extract_skills("python python python sql sql", &vocab());
        assert_eq!(skills, ["Python", "SQL"]);
    }

    #[test]
    fn test_multi_word_phrases() {
        let skills = extract_skills(
            "experienced in rest api design and power bi dashboard creation",
            &vocab(),
        );
        assert_eq!(skills, ["REST", "REST API", "Power BI"]);
    }

    #[test]
    fn test_phrase_must_be_contiguous() {
        let skills = extract_skills("power, bi and machine based learning", &vocab());
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_symbol_skills() {
        let skills = extract_skills("c++ and c# on .net, node.js. ci/cd pipelines", &vocab());
        assert_eq!(skills, ["C++", "C#", ".NET", "Node.js", "CI/CD"]);
    }

    #[test]
    fn test_no_partial_word_match() {
        let skills = extract_skills("pythonic reactive dockerized", &vocab());
        assert!(skills.is_empty());
    }

    #[test]
    fn test_surface_fallback_when_spacing_differs() {
        // Tokens match "ci/cd" but the surface text "ci / cd" has no mapping entry.
        let skills = extract_skills("ci / cd", &vocab());
        assert_eq!(skills, ["ci / cd"]);
    }

    #[test]
    fn test_no_skills() {
        assert!(extract_skills("i like hiking and reading books", &vocab()).is_empty());
        assert!(extract_skills("", &vocab()).is_empty());
    }
}
