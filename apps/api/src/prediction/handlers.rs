use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::application::ApplicationStatus;
use crate::prediction::encoding::ApplicationFeatures;
use crate::prediction::Prediction;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub company_name: String,
    pub job_role: String,
    pub website: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// `None` when the service runs without classifier artifacts.
    pub prediction: Option<Prediction>,
}

/// POST /api/v1/predict
///
/// Scores a draft application without storing it.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let features = ApplicationFeatures {
        company_name: &request.company_name,
        job_role: &request.job_role,
        website: &request.website,
        status: request.status.as_str(),
        notes: request.notes.as_deref(),
    };
    let prediction = state.predictor.as_ref().map(|p| p.predict(&features));
    Ok(Json(PredictResponse { prediction }))
}
