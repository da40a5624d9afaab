//! Axum route handlers for resume upload and job matching.

use std::time::Instant;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::cleaner::clean_text;
use crate::extraction::pdf::extract_text_blocking;
use crate::matching::ranker::{rank_jobs, MatchResult};
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::routes::Envelope;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub resume_profile: CandidateProfile,
    /// Raw job records; validated into `JobPosting`s before any scoring.
    pub jobs: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub job_matches: Vec<MatchResult>,
    pub total_jobs_analysed: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ResumeProfileSummary {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub total_skills_found: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_profile: ResumeProfileSummary,
    pub job_matches: Vec<MatchResult>,
    pub total_jobs_analysed: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /match-jobs
///
/// Ranks caller-supplied jobs against a pre-parsed profile. No extraction.
/// Any malformed job record rejects the whole request.
pub async fn handle_match_jobs(
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<Envelope<MatchJobsResponse>>, AppError> {
    let started = Instant::now();

    let jobs = JobPosting::from_records(request.jobs)?;
    let job_matches = rank_jobs(&request.resume_profile, &jobs);

    Ok(Envelope::ok(
        "Matching completed successfully",
        MatchJobsResponse {
            job_matches,
            total_jobs_analysed: jobs.len(),
            processing_time_ms: elapsed_ms(started),
        },
    ))
}

/// POST /upload-resume
///
/// Multipart PDF upload: extract text, clean it, build the profile and rank
/// it against the local catalogue.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Envelope<UploadResumeResponse>>, AppError> {
    let started = Instant::now();

    let pdf_bytes = read_pdf_field(multipart).await?;
    info!("Received resume upload ({} bytes)", pdf_bytes.len());

    let raw_text = extract_text_blocking(pdf_bytes).await?;
    let cleaned = clean_text(&raw_text)?;
    let profile = state.extractor.extract(&cleaned);
    let job_matches = rank_jobs(&profile, &state.jobs);

    Ok(Envelope::ok(
        "Resume processed successfully",
        UploadResumeResponse {
            resume_profile: ResumeProfileSummary {
                total_skills_found: profile.skills().len(),
                profile,
            },
            job_matches,
            total_jobs_analysed: state.jobs.len(),
            processing_time_ms: elapsed_ms(started),
        },
    ))
}

/// GET /jobs
///
/// Returns the local catalogue, for checking what uploads are matched against.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Envelope<JobsResponse>> {
    Envelope::ok(
        "Jobs loaded from local data",
        JobsResponse {
            jobs: state.jobs.as_ref().clone(),
            total: state.jobs.len(),
        },
    )
}

/// Pulls the `file` field out of the form, insisting on a PDF content type.
async fn read_pdf_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        if content_type != PDF_CONTENT_TYPE {
            return Err(AppError::UnsupportedMediaType(format!(
                "Only PDF files are accepted, got '{content_type}'"
            )));
        }
        return field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
