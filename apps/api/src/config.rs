use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_EMBEDDING_API_URL: &str = "http://localhost:8000/v1/embeddings";
const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub embedding_api_url: String,
    pub embedding_model: String,
    pub embedding_api_key: Option<String>,
    /// Logistic-regression artifact. Prediction is disabled when unset.
    pub interview_model_path: Option<PathBuf>,
    pub feature_columns_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_api_url: std::env::var("EMBEDDING_API_URL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_API_URL.to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_api_key: optional_env("EMBEDDING_API_KEY"),
            interview_model_path: optional_env("INTERVIEW_MODEL_PATH").map(PathBuf::from),
            feature_columns_path: optional_env("FEATURE_COLUMNS_PATH").map(PathBuf::from),
        })
    }

    /// Both artifact paths, or `None` if either is missing.
    pub fn predictor_artifacts(&self) -> Option<(&PathBuf, &PathBuf)> {
        match (&self.interview_model_path, &self.feature_columns_path) {
            (Some(model), Some(columns)) => Some((model, columns)),
            _ => None,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
