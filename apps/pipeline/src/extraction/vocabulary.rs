use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::extraction::skills::phrase_tokens;

/// Known skill phrases, keyed by their lowercase form.
///
/// Built once at startup and shared read-only; the phrase index is grouped
/// by first token so extraction only compares plausible candidates.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    canonical: HashMap<String, String>,
    by_first_token: HashMap<String, Vec<Vec<String>>>,
}

impl SkillVocabulary {
    /// Builds the vocabulary from one phrase per line. Blank lines are
    /// skipped; a later line that differs only in case overrides the casing.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = HashMap::new();
        for line in lines {
            let skill = line.as_ref().trim();
            if !skill.is_empty() {
                canonical.insert(skill.to_lowercase(), skill.to_string());
            }
        }

        let mut by_first_token: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for key in canonical.keys() {
            let tokens = phrase_tokens(key);
            if let Some(first) = tokens.first() {
                by_first_token.entry(first.clone()).or_default().push(tokens);
            }
        }
        for phrases in by_first_token.values_mut() {
            phrases.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        }

        SkillVocabulary {
            canonical,
            by_first_token,
        }
    }

    /// Loads a skills file (one phrase per line).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("skills list not found or unreadable at {}", path.display()))?;
        let vocabulary = Self::from_lines(raw.lines());
        info!("Skill vocabulary built with {} skills", vocabulary.len());
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical casing for a lowercase phrase.
    pub fn canonical(&self, lowercase_phrase: &str) -> Option<&str> {
        self.canonical.get(lowercase_phrase).map(String::as_str)
    }

    /// Tokenized phrases whose first token is `token`, shortest first.
    pub(crate) fn phrases_starting_with(&self, token: &str) -> &[Vec<String>] {
        self.by_first_token
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
