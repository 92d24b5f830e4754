pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::matching::handlers as matching;
use crate::prediction::handlers as prediction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(applications::handle_options))
        // Log / view / update / delete
        .route(
            "/api/v1/applications",
            post(applications::handle_create_application)
                .get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        .route(
            "/api/v1/applications/:id",
            delete(applications::handle_delete_application),
        )
        .route("/api/v1/predict", post(prediction::handle_predict))
        // Resume match
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/match/upload", post(matching::handle_match_upload))
        .route("/api/v1/match/skills", get(matching::handle_skill_vocabulary))
        .with_state(state)
}
