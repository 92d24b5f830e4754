use std::sync::Arc;

use crate::applications::repository::ApplicationStore;
use crate::matching::embedder::Embedder;
use crate::prediction::InterviewPredictor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every service is built once at startup and treated as read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ApplicationStore>,
    pub embedder: Arc<dyn Embedder>,
    /// `None` when no classifier artifacts were configured.
    pub predictor: Option<Arc<InterviewPredictor>>,
}
