//! Resume to job-description matching: semantic similarity, skill overlap
//! and the skill-gap report.

pub mod embedder;
pub mod extract;
pub mod handlers;
pub mod score;
pub mod skills;

use serde::Serialize;
use tracing::debug;

use crate::matching::embedder::{Embedder, EmbeddingError};
use crate::matching::score::{blended_score, cosine_similarity};
use crate::matching::skills::{find_missing_skills, skill_overlap_ratio, SKILL_VOCABULARY};

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// 0 – 100, two decimals.
    pub match_score: f64,
    pub semantic_similarity: f64,
    pub skill_overlap_ratio: f64,
    pub missing_skills: Vec<String>,
    pub suggestion: String,
}

/// Scores `resume_text` against `jd_text`. Empty inputs are valid.
pub async fn match_resume(
    embedder: &dyn Embedder,
    resume_text: &str,
    jd_text: &str,
) -> Result<MatchReport, EmbeddingError> {
    let vectors = embedder.embed(&[resume_text, jd_text]).await?;
    let semantic_similarity = match vectors.as_slice() {
        [resume, jd] => cosine_similarity(resume, jd),
        _ => {
            return Err(EmbeddingError::Count {
                expected: 2,
                found: vectors.len(),
            })
        }
    };

    let overlap = skill_overlap_ratio(resume_text, jd_text, SKILL_VOCABULARY);
    let missing_skills = find_missing_skills(resume_text, jd_text, SKILL_VOCABULARY);
    let match_score = blended_score(semantic_similarity, overlap);

    debug!(
        "Match computed: score={match_score}, similarity={semantic_similarity:.4}, overlap={overlap:.2}, missing={}",
        missing_skills.len()
    );

    Ok(MatchReport {
        match_score,
        semantic_similarity,
        skill_overlap_ratio: overlap,
        suggestion: build_suggestion(&missing_skills),
        missing_skills,
    })
}

fn build_suggestion(missing_skills: &[String]) -> String {
    if missing_skills.is_empty() {
        "Your resume already covers most key skills for this role.".to_string()
    } else {
        format!("Suggested skills to add: {}", missing_skills.join(", "))
    }
}
