//! Tokenizer helpers shared by the scorers and extractors.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words ignored when comparing roles with job titles.
pub const STOP_WORDS: &[&str] = &["and", "or", "the", "a", "an", "of", "in", "at", "for"];

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Splits a comma-delimited skills column into trimmed, non-empty tokens.
///
/// `"Software Development, Python, , SQL"` becomes
/// `["Software Development", "Python", "SQL"]`.
pub fn comma_tokens(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lowercased set of comma tokens, for membership tests.
pub fn folded_set<'a>(items: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    items.into_iter().map(str::to_lowercase).collect()
}

/// Lowercase word tokens with stop words removed. Order and repeats are kept.
pub fn role_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// `"ui/ux designer"` becomes `"Ui/Ux Designer"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_tokens_trim_and_skip_empty() {
        assert_eq!(
            comma_tokens("Software Development, Python, , SQL ,"),
            ["Software Development", "Python", "SQL"]
        );
    }

    #[test]
    fn test_comma_tokens_empty_text() {
        assert!(comma_tokens("").is_empty());
        assert!(comma_tokens(" , ,").is_empty());
    }

    #[test]
    fn test_role_words_drop_stop_words() {
        assert_eq!(
            role_words("Head of Sales and Marketing"),
            ["head", "sales", "marketing"]
        );
    }

    #[test]
    fn test_role_words_split_on_punctuation() {
        assert_eq!(role_words("Full-Stack Dev/Ops"), ["full", "stack", "dev", "ops"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("full stack developer"), "Full Stack Developer");
        assert_eq!(title_case("ui/ux designer"), "Ui/Ux Designer");
        assert_eq!(title_case("full-stack developer"), "Full-Stack Developer");
        assert_eq!(title_case("qa"), "Qa");
    }

    #[test]
    fn test_folded_set() {
        let set = folded_set(["Python", "PYTHON", "Sql"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("sql"));
    }
}
