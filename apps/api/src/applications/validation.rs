use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, NewApplication};

/// Raw form submission for a new application.
///
/// Text fields default to empty so a missing field surfaces as a validation
/// message instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_role: String,
    /// Defaults to today when omitted.
    pub applied_date: Option<NaiveDate>,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

/// Checks required fields and normalizes whitespace.
/// No write may happen when this returns an error.
pub fn validate_application(
    form: ApplicationForm,
    today: NaiveDate,
) -> Result<NewApplication, AppError> {
    let company_name = form.company_name.trim();
    let job_role = form.job_role.trim();
    let website = form.website.trim();

    let missing: Vec<&str> = [
        ("company_name", company_name),
        ("job_role", job_role),
        ("website", website),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill all the fields (missing: {})",
            missing.join(", ")
        )));
    }

    let notes = form
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    Ok(NewApplication {
        company_name: company_name.to_string(),
        job_role: job_role.to_string(),
        applied_date: form.applied_date.unwrap_or(today),
        website: website.to_string(),
        status: form.status,
        notes,
    })
}
