use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::errors::AppError;

/// A job posting, validated once at the boundary.
///
/// Field names on the wire follow the jobs table. `id`, `company` and
/// `job_title` are required; the remaining text fields default to empty.
/// Only `job_function`, `job_title` and `experience` feed the score;
/// `qualification` and `vacancies` are carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub company: String,
    #[serde(rename = "job_title", alias = "title")]
    pub title: String,
    #[serde(
        rename = "job_function",
        alias = "required_skills_text",
        default,
        deserialize_with = "lenient_text"
    )]
    pub required_skills_text: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub vacancies: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub qualification: String,
    #[serde(
        rename = "experience",
        alias = "experience_requirement_text",
        default,
        deserialize_with = "lenient_text"
    )]
    pub experience_requirement_text: String,
}

#[derive(Debug, Error)]
#[error("job record {index} is malformed: {source}")]
pub struct JobRecordError {
    pub index: usize,
    #[source]
    pub source: serde_json::Error,
}

impl From<JobRecordError> for AppError {
    fn from(err: JobRecordError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl JobPosting {
    /// Converts loosely-typed records into postings, failing on the first bad one.
    pub fn from_records(records: Vec<Value>) -> Result<Vec<JobPosting>, JobRecordError> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record).map_err(|source| JobRecordError { index, source })
            })
            .collect()
    }
}

/// Optional text columns arrive as strings, numbers (vacancies) or null.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_deserializes() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 7,
            "company": "Acme",
            "job_title": "Python Backend Engineer",
            "job_function": "Python, Django, SQL",
            "vacancies": "3",
            "qualification": "B.Tech",
            "experience": "2-4 years"
        }))
        .unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.title, "Python Backend Engineer");
        assert_eq!(job.required_skills_text, "Python, Django, SQL");
        assert_eq!(job.experience_requirement_text, "2-4 years");
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 1,
            "company": "Acme",
            "job_title": "Analyst",
            "qualification": null
        }))
        .unwrap();
        assert!(job.required_skills_text.is_empty());
        assert!(job.qualification.is_empty());
        assert!(job.experience_requirement_text.is_empty());
    }

    #[test]
    fn test_numeric_vacancies_become_text() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 1, "company": "Acme", "job_title": "Analyst", "vacancies": 12
        }))
        .unwrap();
        assert_eq!(job.vacancies, "12");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 1, "company": "Acme", "job_title": "Analyst", "location": "Remote"
        }))
        .unwrap();
        assert_eq!(job.company, "Acme");
    }

    #[test]
    fn test_missing_required_field_reports_index() {
        let records = vec![
            json!({"id": 1, "company": "Acme", "job_title": "Analyst"}),
            json!({"id": 2, "job_title": "Designer"}),
        ];
        let err = JobPosting::from_records(records).unwrap_err();
        assert_eq!(err.index, 1);
        assert!(err.to_string().contains("company"), "{err}");
    }

    #[test]
    fn test_record_error_is_validation() {
        let err = JobPosting::from_records(vec![json!({"company": "Acme"})]).unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_serializes_table_names() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 3, "company": "Acme", "title": "Analyst", "required_skills_text": "SQL"
        }))
        .unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["job_title"], "Analyst");
        assert_eq!(value["job_function"], "SQL");
    }
}
