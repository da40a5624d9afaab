//! Factor 1: candidate skills vs the job's comma-delimited skill column.

use tracing::debug;

use crate::text::{comma_tokens, folded_set};

/// Fraction of the job's skill tokens that the candidate has.
///
/// The denominator is the job's token count, so a candidate with many
/// unrelated skills is never diluted. Returns 0.0 when either side is empty.
pub fn skill_score(profile_skills: &[String], job_skills_text: &str) -> f64 {
    if profile_skills.is_empty() {
        return 0.0;
    }

    let tokens = comma_tokens(job_skills_text);
    if tokens.is_empty() {
        return 0.0;
    }

    let job_set = folded_set(tokens.iter().copied());
    let skill_set = folded_set(profile_skills.iter().map(String::as_str));
    let matched = job_set.intersection(&skill_set).count();

    let score = (matched as f64 / tokens.len() as f64).clamp(0.0, 1.0);
    debug!(
        "Skill score: {matched}/{} tokens matched -> {score:.4}",
        tokens.len()
    );
    score
}

/// Profile skills present in the job text, in profile order and casing.
pub fn matched_skills(profile_skills: &[String], job_skills_text: &str) -> Vec<String> {
    let job_set = folded_set(comma_tokens(job_skills_text));
    profile_skills
        .iter()
        .filter(|skill| job_set.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Job tokens the candidate lacks, in job order and casing.
pub fn missing_skills(profile_skills: &[String], job_skills_text: &str) -> Vec<String> {
    let skill_set = folded_set(profile_skills.iter().map(String::as_str));
    comma_tokens(job_skills_text)
        .into_iter()
        .filter(|token| !skill_set.contains(&token.to_lowercase()))
        .map(str::to_string)
        .collect()
}
