use tracing::info;

use crate::extraction::experience::infer_years;
use crate::extraction::role::infer_role;
use crate::extraction::skills::extract_skills;
use crate::extraction::vocabulary::SkillVocabulary;
use crate::models::profile::CandidateProfile;

/// Immutable extraction context, built once at startup and shared via `Arc`.
pub struct ProfileExtractor {
    vocabulary: SkillVocabulary,
}

impl ProfileExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        ProfileExtractor { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Runs skill, role and experience extraction over cleaned resume text.
    pub fn extract(&self, cleaned_text: &str) -> CandidateProfile {
        let skills = extract_skills(cleaned_text, &self.vocabulary);
        let role = infer_role(cleaned_text);
        let years = infer_years(cleaned_text);

        info!(
            "Extraction complete. Skills: {} | Role: {:?} | Experience: {:?} yr",
            skills.len(),
            role,
            years
        );
        CandidateProfile::new(skills, role, years)
    }
}
