use std::sync::Arc;

use crate::config::Config;
use crate::extraction::profile::ProfileExtractor;
use crate::models::job::JobPosting;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind the `Arc`s is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill vocabulary and extraction heuristics, built once at startup.
    pub extractor: Arc<ProfileExtractor>,
    /// Local job catalogue used by `/upload-resume` and `/jobs`.
    pub jobs: Arc<Vec<JobPosting>>,
}

#[cfg(test)]
impl AppState {
    /// Small in-memory state for router tests.
    pub fn for_tests() -> Self {
        use crate::extraction::vocabulary::SkillVocabulary;

        let vocabulary = SkillVocabulary::from_lines(["Python", "SQL", "Django", "React"]);
        let jobs = vec![
            JobPosting {
                id: 1,
                company: "Acme".to_string(),
                title: "Python Backend Developer".to_string(),
                required_skills_text: "Python, SQL".to_string(),
                vacancies: "2".to_string(),
                qualification: "B.Tech".to_string(),
                experience_requirement_text: "2-4 years".to_string(),
            },
            JobPosting {
                id: 2,
                company: "Globex".to_string(),
                title: "Graphic Designer".to_string(),
                required_skills_text: "Photoshop".to_string(),
                vacancies: "1".to_string(),
                qualification: String::new(),
                experience_requirement_text: "Fresher".to_string(),
            },
        ];

        AppState {
            config: Config::for_tests(),
            extractor: Arc::new(ProfileExtractor::new(vocabulary)),
            jobs: Arc::new(jobs),
        }
    }
}
