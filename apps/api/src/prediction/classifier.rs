use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("classifier expects {expected} features but the schema has {found} columns")]
    Shape { expected: usize, found: usize },
}

/// A pretrained binary classifier. Implementations are read-only after
/// loading and may be shared across requests without locking.
pub trait ProbabilityClassifier: Send + Sync {
    fn n_features(&self) -> usize;

    /// Probability of the positive class for one encoded row.
    fn predict_proba(&self, row: &[f64]) -> f64;
}

/// Logistic-regression weights exported from the training notebook.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl ProbabilityClassifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_proba(&self, row: &[f64]) -> f64 {
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Reads and deserializes a JSON artifact from disk.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_logit_is_one_half() {
        let model = LogisticRegression {
            intercept: 0.0,
            coefficients: vec![1.0, -1.0],
        };
        assert!((model.predict_proba(&[1.0, 1.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_bounded_for_extreme_logits() {
        let model = LogisticRegression {
            intercept: 0.0,
            coefficients: vec![1000.0],
        };
        assert_eq!(model.predict_proba(&[1.0]), 1.0);
        assert_eq!(model.predict_proba(&[-1.0]), 0.0);
    }

    #[test]
    fn test_intercept_only_on_zero_row() {
        let model = LogisticRegression {
            intercept: 2.0,
            coefficients: vec![0.7, 0.3],
        };
        let expected = 1.0 / (1.0 + (-2.0_f64).exp());
        assert!((model.predict_proba(&[0.0, 0.0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_load_json_reports_missing_file() {
        let err = load_json::<LogisticRegression>(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }
}
