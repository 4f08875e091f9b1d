//! Common transport-layer types shared between the prediction service and
//! the dashboard frontend. Both sides serialize the same shapes so the
//! request contract only lives in one place.

mod prediction;

pub use prediction::{FEATURE_COUNT, FEATURE_LABELS, PredictionRequest, PredictionResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the backend for any non-success status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Machine readable error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}
