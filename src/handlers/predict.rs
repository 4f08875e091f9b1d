use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use common::PredictionResponse;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::{api_error, ApiError};
use crate::predictor::predict_days;
use crate::schemas::AppState;

const INVALID_FEATURES: &str = "Invalid input, features must be a list";

/// Pull `features` out of a request body.
///
/// The body is inspected by hand so a malformed list is a 400 with a
/// readable message rather than a generic extractor rejection.
pub fn parse_features(body: &Value) -> Result<Vec<f64>, String> {
    let list = match body.get("features") {
        Some(Value::Array(list)) if !list.is_empty() => list,
        _ => return Err(INVALID_FEATURES.to_string()),
    };

    list.iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_f64()
                .ok_or_else(|| format!("Invalid input, feature {} is not a number", index))
        })
        .collect()
}

/// Predict days until maintenance for one feature vector
#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    request_body = common::PredictionRequest,
    responses(
        (status = 200, description = "Prediction computed", body = PredictionResponse),
        (status = 400, description = "Invalid input", body = common::ErrorResponse),
        (status = 500, description = "Prediction error", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected prediction body: {}", rejection);
        api_error(StatusCode::BAD_REQUEST, INVALID_FEATURES, "INVALID_INPUT")
    })?;

    let features = parse_features(&body).map_err(|message| {
        warn!("Invalid prediction request: {}", message);
        api_error(StatusCode::BAD_REQUEST, message, "INVALID_INPUT")
    })?;
    debug!("Predicting for features {:?}", features);

    let days = predict_days(state.model.as_ref(), &features).map_err(|e| {
        error!("Prediction error: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "PREDICTION_ERROR")
    })?;

    info!("Predicted {} days until maintenance", days);
    Ok(Json(PredictionResponse {
        prediction: days as f64,
    }))
}
