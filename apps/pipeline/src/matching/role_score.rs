//! Factor 2: inferred role vs job title.

use std::collections::HashSet;

use tracing::debug;

use crate::text::role_words;

/// Share of the candidate's role words that appear in the job title.
///
/// The denominator is the role's word count, so "Developer" fully matches
/// "Senior Python Developer". Missing or empty roles score 0.0.
pub fn role_score(parsed_role: Option<&str>, job_title: &str) -> f64 {
    let Some(role) = parsed_role.filter(|r| !r.trim().is_empty()) else {
        return 0.0;
    };

    let role_tokens = role_words(role);
    if role_tokens.is_empty() {
        return 0.0;
    }
    let title_tokens: HashSet<String> = role_words(job_title).into_iter().collect();
    if title_tokens.is_empty() {
        return 0.0;
    }

    let matched = role_tokens
        .iter()
        .filter(|word| title_tokens.contains(*word))
        .count();

    let score = (matched as f64 / role_tokens.len() as f64).clamp(0.0, 1.0);
    debug!(
        "Role score: {matched}/{} words matched ('{role}' vs '{job_title}') -> {score:.4}",
        role_tokens.len()
    );
    score
}
