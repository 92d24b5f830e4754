//! Axum route handlers for the Resume Match API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::extract::extract_resume_text;
use crate::matching::skills::SKILL_VOCABULARY;
use crate::matching::{match_resume, MatchReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillVocabularyResponse {
    pub skills: Vec<&'static str>,
}

/// GET /api/v1/match/skills
pub async fn handle_skill_vocabulary() -> Json<SkillVocabularyResponse> {
    Json(SkillVocabularyResponse {
        skills: SKILL_VOCABULARY.to_vec(),
    })
}

/// POST /api/v1/match
///
/// Scores already-extracted resume text against a job description.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = match_resume(
        state.embedder.as_ref(),
        &request.resume_text,
        &request.jd_text,
    )
    .await?;
    info!("Resume match score {}", report.match_score);
    Ok(Json(report))
}

/// POST /api/v1/match/upload
///
/// Multipart form: `resume` (a .txt or .pdf file) and `jd_text`.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume: Option<(String, Vec<u8>)> = None;
    let mut jd_text = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some((file_name, data.to_vec()));
            }
            "jd_text" => {
                jd_text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read jd_text: {e}")))?;
            }
            _ => {}
        }
    }

    let (file_name, data) =
        resume.ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;
    let resume_text = extract_resume_text(&file_name, data)?;
    info!(
        "Extracted {} characters from uploaded resume {file_name}",
        resume_text.len()
    );

    let report = match_resume(state.embedder.as_ref(), &resume_text, &jd_text).await?;
    info!("Resume match score {}", report.match_score);
    Ok(Json(report))
}
