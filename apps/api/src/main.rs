mod applications;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod prediction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::applications::repository::PgApplicationStore;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::matching::embedder::HttpEmbedder;
use crate::prediction::InterviewPredictor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job tracker API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize embedding client
    let embedder = HttpEmbedder::new(
        config.embedding_api_url.clone(),
        config.embedding_model.clone(),
        config.embedding_api_key.clone(),
    )
    .context("Failed to build embedding client")?;
    info!(
        "Embedding client initialized (model: {}, url: {})",
        embedder.model(),
        config.embedding_api_url
    );

    // Load classifier artifacts once; they stay read-only for the process lifetime
    let predictor = match config.predictor_artifacts() {
        Some((model_path, columns_path)) => Some(Arc::new(
            InterviewPredictor::load(model_path, columns_path)
                .context("Failed to load interview predictor artifacts")?,
        )),
        None => {
            warn!("INTERVIEW_MODEL_PATH / FEATURE_COLUMNS_PATH not set, interview prediction disabled");
            None
        }
    };

    let state = AppState {
        store: Arc::new(PgApplicationStore::new(db)),
        embedder: Arc::new(embedder),
        predictor,
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
