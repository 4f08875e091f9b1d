use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, error, instrument, trace};

use super::{api_error, ApiError};
use crate::dataset::DatasetError;
use crate::schemas::{AppState, CachedData, ComponentMetrics, FailureCounts, HealthMetrics};

fn dataset_error(err: DatasetError, missing_status: StatusCode) -> ApiError {
    match err {
        DatasetError::MissingColumns(_) => {
            debug!("Dataset summary unavailable: {}", err);
            api_error(missing_status, "Required columns missing in dataset", "MISSING_COLUMNS")
        }
        other => {
            error!("Dataset summary failed: {}", other);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string(), "DATASET_ERROR")
        }
    }
}

/// Average oil pressure, tire pressure and battery health
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Component averages", body = ComponentMetrics),
        (status = 400, description = "Required columns missing in dataset", body = common::ErrorResponse),
        (status = 500, description = "Dataset error", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<ComponentMetrics>, ApiError> {
    if let Some(CachedData::Metrics(metrics)) = state.cache.get("metrics").await {
        trace!("Serving component metrics from cache");
        return Ok(Json(metrics));
    }

    let metrics = state
        .dataset
        .component_metrics()
        .map_err(|e| dataset_error(e, StatusCode::BAD_REQUEST))?;
    state
        .cache
        .insert("metrics".to_string(), CachedData::Metrics(metrics.clone()))
        .await;

    Ok(Json(metrics))
}

/// Maintenance events per month
#[utoipa::path(
    get,
    path = "/failures",
    tag = "metrics",
    responses(
        (status = 200, description = "Failure counts keyed by month abbreviation", body = FailureCounts),
        (status = 400, description = "Required columns missing in dataset", body = common::ErrorResponse),
        (status = 500, description = "Dataset error", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_failures(State(state): State<AppState>) -> Result<Json<FailureCounts>, ApiError> {
    if let Some(CachedData::Failures(counts)) = state.cache.get("failures").await {
        trace!("Serving failure counts from cache");
        return Ok(Json(counts));
    }

    let counts = state
        .dataset
        .failure_counts()
        .map_err(|e| dataset_error(e, StatusCode::BAD_REQUEST))?;
    state
        .cache
        .insert("failures".to_string(), CachedData::Failures(counts.clone()))
        .await;

    Ok(Json(counts))
}

/// Sensor averages, zero where the dataset lacks the sensor
#[utoipa::path(
    get,
    path = "/health-metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Sensor averages", body = HealthMetrics),
        (status = 500, description = "Dataset error", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_health_metrics(
    State(state): State<AppState>,
) -> Result<Json<HealthMetrics>, ApiError> {
    if let Some(CachedData::HealthMetrics(metrics)) = state.cache.get("health-metrics").await {
        trace!("Serving health metrics from cache");
        return Ok(Json(metrics));
    }

    let metrics = state
        .dataset
        .health_metrics()
        .map_err(|e| dataset_error(e, StatusCode::INTERNAL_SERVER_ERROR))?;
    state
        .cache
        .insert("health-metrics".to_string(), CachedData::HealthMetrics(metrics.clone()))
        .await;

    Ok(Json(metrics))
}
