//! Ranker: scores every job against one profile, then sorts and ranks.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matching::combine::{combine, to_percent, MatchLabel};
use crate::matching::experience_score::experience_score;
use crate::matching::role_score::role_score;
use crate::matching::skill_score::{matched_skills, missing_skills, skill_score};
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

/// Raw `[0, 1]` factor scores for one (profile, job) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub skill: f64,
    pub role: f64,
    pub experience: f64,
}

impl FactorScores {
    pub fn compute(profile: &CandidateProfile, job: &JobPosting) -> Self {
        FactorScores {
            skill: skill_score(profile.skills(), &job.required_skills_text),
            role: role_score(profile.role(), &job.title),
            experience: experience_score(
                profile.experience_years(),
                &job.experience_requirement_text,
            ),
        }
    }
}

/// One ranked job. Percentages are 0–100 with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: i64,
    pub company: String,
    pub job_title: String,
    pub job_function: String,
    pub vacancies: String,
    /// Informational only; never scored.
    pub qualification: String,
    pub experience_required: String,
    pub final_score: f64,
    pub skill_score: f64,
    pub role_score: f64,
    pub experience_score: f64,
    pub match_label: MatchLabel,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub rank: usize,
}

/// Scores one job. `rank` stays 0 until [`rank_jobs`] sorts the batch.
pub fn score_job(profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
    let factors = FactorScores::compute(profile, job);
    let final_score = combine(factors.skill, factors.role, factors.experience);

    MatchResult {
        job_id: job.id,
        company: job.company.clone(),
        job_title: job.title.clone(),
        job_function: job.required_skills_text.clone(),
        vacancies: job.vacancies.clone(),
        qualification: job.qualification.clone(),
        experience_required: job.experience_requirement_text.clone(),
        final_score,
        skill_score: to_percent(factors.skill),
        role_score: to_percent(factors.role),
        experience_score: to_percent(factors.experience),
        match_label: MatchLabel::from_final_score(final_score),
        matched_skills: matched_skills(profile.skills(), &job.required_skills_text),
        missing_skills: missing_skills(profile.skills(), &job.required_skills_text),
        rank: 0,
    }
}

/// Scores all jobs, sorts by `final_score` descending (stable, so ties keep
/// input order) and assigns 1-based ranks. No truncation happens here.
pub fn rank_jobs(profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = jobs.iter().map(|job| score_job(profile, job)).collect();

    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    for (index, result) in results.iter_mut().enumerate() {
        result.rank = index + 1;
    }

    match results.first() {
        Some(top) => info!(
            "Matched {} job(s). Top match: '{}' @ {:.2}% ({})",
            results.len(),
            top.job_title,
            top.final_score,
            top.match_label.as_str()
        ),
        None => info!("Matched 0 job(s)"),
    }
    results
}
