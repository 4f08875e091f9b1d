use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of sensor metrics the prediction model consumes.
pub const FEATURE_COUNT: usize = 4;

/// Human readable names of the model inputs, in wire order.
pub const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "Mileage Since Last Maintenance",
    "Engine Hours",
    "Average Speed",
    "Oil Quality Sensor",
];

/// Body of `POST /predict`.
///
/// The order of `features` is significant and must follow [`FEATURE_LABELS`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionRequest {
    /// Sensor readings in model order
    pub features: Vec<f64>,
}

impl From<[f64; FEATURE_COUNT]> for PredictionRequest {
    fn from(features: [f64; FEATURE_COUNT]) -> Self {
        Self {
            features: features.to_vec(),
        }
    }
}

/// Successful answer of `POST /predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResponse {
    /// Days until maintenance is predicted to be required
    pub prediction: f64,
}
