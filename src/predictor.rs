//! Maintenance model.
//!
//! The service only needs something that maps an ordered feature vector to
//! a number of days. [`LinearModel`] is the model format shipped with the
//! service: a JSON file with the feature column order, one coefficient per
//! column and an intercept.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors while loading a model file
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Model has {columns} feature columns but {coefficients} coefficients")]
    Shape { columns: usize, coefficients: usize },
}

/// Errors while running a prediction
#[derive(Error, Debug, PartialEq)]
pub enum PredictError {
    #[error("Expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Model produced a non-finite prediction")]
    NonFinite,
}

pub trait Predictor: Send + Sync + Debug {
    /// Column names in the order `predict` expects its input
    fn feature_columns(&self) -> &[String];

    /// Raw model output for one row
    fn predict(&self, features: &[f64]) -> Result<f64, PredictError>;
}

/// Run the model and truncate its output to whole days.
pub fn predict_days(model: &dyn Predictor, features: &[f64]) -> Result<i64, PredictError> {
    let raw = model.predict(features)?;
    if !raw.is_finite() {
        return Err(PredictError::NonFinite);
    }
    Ok(raw.trunc() as i64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_columns: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(
        feature_columns: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        if feature_columns.len() != coefficients.len() {
            return Err(ModelError::Shape {
                columns: feature_columns.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            feature_columns,
            coefficients,
            intercept,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: LinearModel = serde_json::from_str(json)?;
        Self::new(model.feature_columns, model.coefficients, model.intercept)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        debug!("Loading model from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&json)?;
        info!(
            "Loaded linear model with {} features: {:?}",
            model.feature_columns.len(),
            model.feature_columns
        );
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictError::FeatureCount {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = features
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        Ok(self.intercept + dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> LinearModel {
        LinearModel::new(
            vec!["a".to_string(), "b".to_string()],
            vec![2.0, -1.0],
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn test_linear_prediction() {
        let model = sample_model();
        assert_eq!(model.predict(&[3.0, 4.0]), Ok(12.0));
    }

    #[test]
    fn test_predict_days_truncates_toward_zero() {
        let model = sample_model();
        assert_eq!(predict_days(&model, &[0.3, 0.0]), Ok(10));
        assert_eq!(predict_days(&model, &[-5.4, 0.0]), Ok(0));
        assert_eq!(predict_days(&model, &[-5.75, 0.0]), Ok(-1));
    }

    #[test]
    fn test_feature_count_mismatch() {
        let model = sample_model();
        assert_eq!(
            model.predict(&[1.0]),
            Err(PredictError::FeatureCount { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_non_finite_output_is_rejected() {
        let model = sample_model();
        assert_eq!(predict_days(&model, &[f64::MAX, -f64::MAX]), Err(PredictError::NonFinite));
    }

    #[test]
    fn test_from_json_validates_shape() {
        let result = LinearModel::from_json(
            r#"{"feature_columns": ["a", "b"], "coefficients": [1.0], "intercept": 0.0}"#,
        );
        assert!(matches!(
            result,
            Err(ModelError::Shape { columns: 2, coefficients: 1 })
        ));
    }

    #[test]
    fn test_bundled_model_matches_request_contract() {
        let model = LinearModel::load(Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/models/maintenance_model.json"
        )))
        .expect("bundled model should load");

        assert_eq!(model.feature_columns().len(), common::FEATURE_COUNT);
        assert!(predict_days(&model, &[65.0, 80.0, 90.0, 1.0]).is_ok());
    }
}
