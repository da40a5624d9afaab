use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::matching::combine::WEIGHTS;
use crate::routes::Envelope;
use crate::state::AppState;

/// GET /health
/// Returns service status, loaded resources and the factor weights.
pub async fn health_handler(State(state): State<AppState>) -> Json<Envelope<Value>> {
    Envelope::ok(
        "Pipeline is running",
        json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "service": "resume-pipeline",
            "skills_loaded": state.extractor.vocabulary().len(),
            "jobs_loaded": state.jobs.len(),
            "matching_factors": {
                "skill_match": WEIGHTS.skill,
                "role_match": WEIGHTS.role,
                "experience_match": WEIGHTS.experience,
            }
        }),
    )
}
