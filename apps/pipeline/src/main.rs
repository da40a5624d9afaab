mod catalog;
mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;
mod text;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_jobs;
use crate::config::Config;
use crate::extraction::profile::ProfileExtractor;
use crate::extraction::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume pipeline v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary is required; an unreadable file fails startup
    let vocabulary = SkillVocabulary::load(&config.skills_file)?;
    if vocabulary.is_empty() {
        warn!(
            "Skill vocabulary at {} is empty; no skills will be extracted",
            config.skills_file.display()
        );
    }

    let jobs = load_jobs(&config.jobs_file)?;

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(ProfileExtractor::new(vocabulary)),
        jobs: Arc::new(jobs),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
