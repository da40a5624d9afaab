use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SKILLS_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/skills_list.txt");
const DEFAULT_JOBS_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/jobs_data.json");
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_file: PathBuf,
    pub jobs_file: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            skills_file: PathBuf::from(env_or("SKILLS_FILE", DEFAULT_SKILLS_FILE)),
            jobs_file: PathBuf::from(env_or("JOBS_FILE", DEFAULT_JOBS_FILE)),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{raw}'"))?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config pointing at the bundled data files, for router tests.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            skills_file: PathBuf::from(DEFAULT_SKILLS_FILE),
            jobs_file: PathBuf::from(DEFAULT_JOBS_FILE),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
