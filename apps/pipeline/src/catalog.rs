use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{error, info};

use crate::models::job::JobPosting;

/// Loads the local job catalogue (a JSON array of job records).
///
/// A missing file is logged and yields an empty catalogue so the service can
/// still answer `/match-jobs`; a malformed file or record fails startup.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    if !path.exists() {
        error!("Jobs file not found at {}", path.display());
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read jobs file {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Jobs file {} is not a JSON array", path.display()))?;
    let jobs = JobPosting::from_records(records)
        .with_context(|| format!("Invalid job in {}", path.display()))?;

    info!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}
