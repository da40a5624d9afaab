use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The three fields extracted from a resume, as consumed by the matcher.
///
/// Skills are an ordered set: duplicates are dropped on construction, the
/// first occurrence keeps its position and casing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileFields")]
pub struct CandidateProfile {
    #[serde(rename = "extracted_skills")]
    skills: Vec<String>,
    #[serde(rename = "parsed_role")]
    role: Option<String>,
    experience_years: Option<u32>,
}

/// Wire shape before skill dedup.
#[derive(Deserialize)]
struct ProfileFields {
    #[serde(default)]
    extracted_skills: Vec<String>,
    #[serde(default)]
    parsed_role: Option<String>,
    #[serde(default)]
    experience_years: Option<u32>,
}

impl From<ProfileFields> for CandidateProfile {
    fn from(fields: ProfileFields) -> Self {
        CandidateProfile::new(
            fields.extracted_skills,
            fields.parsed_role,
            fields.experience_years,
        )
    }
}

impl CandidateProfile {
    pub fn new(
        skills: impl IntoIterator<Item = String>,
        role: Option<String>,
        experience_years: Option<u32>,
    ) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .filter(|skill| seen.insert(skill.clone()))
            .collect();

        CandidateProfile {
            skills,
            role,
            experience_years,
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn experience_years(&self) -> Option<u32> {
        self.experience_years
    }
}
