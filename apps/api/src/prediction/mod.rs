//! Interview-probability prediction from a pretrained classifier.
//!
//! The classifier and its feature-column schema are loaded once at startup;
//! a prediction is encode-then-score, nothing more.

pub mod classifier;
pub mod encoding;
pub mod handlers;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::prediction::classifier::{
    load_json, ArtifactError, LogisticRegression, ProbabilityClassifier,
};
use crate::prediction::encoding::{encode_row, ApplicationFeatures};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Positive-class probability in [0, 1].
    pub probability: f64,
    /// `probability` as a whole percentage, as shown to the user.
    pub chance_pct: f64,
}

pub struct InterviewPredictor {
    feature_columns: Vec<String>,
    classifier: Box<dyn ProbabilityClassifier>,
}

impl InterviewPredictor {
    pub fn new(
        feature_columns: Vec<String>,
        classifier: Box<dyn ProbabilityClassifier>,
    ) -> Result<Self, ArtifactError> {
        if classifier.n_features() != feature_columns.len() {
            return Err(ArtifactError::Shape {
                expected: classifier.n_features(),
                found: feature_columns.len(),
            });
        }
        Ok(Self {
            feature_columns,
            classifier,
        })
    }

    /// Loads a logistic-regression artifact and its feature-column list.
    pub fn load(model_path: &Path, columns_path: &Path) -> Result<Self, ArtifactError> {
        let model: LogisticRegression = load_json(model_path)?;
        let columns: Vec<String> = load_json(columns_path)?;
        let predictor = Self::new(columns, Box::new(model))?;
        info!(
            "Interview predictor loaded ({} feature columns)",
            predictor.feature_columns.len()
        );
        Ok(predictor)
    }

    pub fn predict(&self, features: &ApplicationFeatures<'_>) -> Prediction {
        let row = encode_row(features, &self.feature_columns);
        let probability = self.classifier.predict_proba(&row).clamp(0.0, 1.0);
        Prediction {
            probability,
            chance_pct: whole_percent(probability),
        }
    }
}

/// Rounds to a whole percentage, ties to even.
fn whole_percent(probability: f64) -> f64 {
    (probability * 100.0).round_ties_even()
}
