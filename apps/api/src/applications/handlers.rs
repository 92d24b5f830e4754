//! Axum route handlers for logging, listing, updating and deleting
//! job applications.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::applications::validation::{validate_application, ApplicationForm};
use crate::errors::AppError;
use crate::models::application::{
    ApplicationStatus, JobApplication, JOB_ROLE_OPTIONS, WEBSITE_OPTIONS,
};
use crate::prediction::encoding::ApplicationFeatures;
use crate::prediction::Prediction;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateApplicationResponse {
    pub application: JobApplication,
    /// `None` when the predictor is disabled.
    pub interview_prediction: Option<Prediction>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub job_roles: &'static [&'static str],
    pub websites: &'static [&'static str],
    pub statuses: Vec<&'static str>,
}

/// GET /api/v1/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        job_roles: JOB_ROLE_OPTIONS,
        websites: WEBSITE_OPTIONS,
        statuses: ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect(),
    })
}

/// POST /api/v1/applications
///
/// Validates and stores the application, then scores its interview chance.
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> Result<(StatusCode, Json<CreateApplicationResponse>), AppError> {
    let today = chrono::Local::now().date_naive();
    let new_application = validate_application(form, today)?;

    let application = state.store.insert(&new_application).await?;
    info!(
        "Logged application {} ({} at {})",
        application.id, application.job_role, application.company_name
    );

    let interview_prediction = state.predictor.as_ref().map(|predictor| {
        predictor.predict(&ApplicationFeatures {
            company_name: &application.company_name,
            job_role: &application.job_role,
            website: &application.website,
            status: &application.status,
            notes: application.notes.as_deref(),
        })
    });

    Ok((
        StatusCode::CREATED,
        Json(CreateApplicationResponse {
            application,
            interview_prediction,
        }),
    ))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode, AppError> {
    if !state.store.update_status(id, request.status).await? {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }
    info!("Application {id} status set to {}", request.status);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }
    info!("Application {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}
