use common::{ErrorResponse, PredictionRequest, PredictionResponse};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::dataset::Dataset;
use crate::predictor::Predictor;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Model behind `/predict`
    pub model: Arc<dyn Predictor>,
    /// Telemetry dataset behind the summary endpoints
    pub dataset: Arc<Dataset>,
    /// Cache for dataset aggregates
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Metrics(ComponentMetrics),
    Failures(FailureCounts),
    HealthMetrics(HealthMetrics),
}

/// Fleet-wide component averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComponentMetrics {
    #[serde(rename = "Oil Pressure")]
    pub oil_pressure: f64,
    #[serde(rename = "Tire Pressure")]
    pub tire_pressure: f64,
    #[serde(rename = "Battery Health")]
    pub battery_health: f64,
}

/// Maintenance events per month abbreviation (`Jan`, `Feb`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FailureCounts(pub BTreeMap<String, u64>);

/// Sensor averages, zero for sensors the dataset does not record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthMetrics {
    #[serde(rename = "Average Oil Pressure")]
    pub average_oil_pressure: f64,
    #[serde(rename = "Average Tire Pressure")]
    pub average_tire_pressure: f64,
    #[serde(rename = "Battery Health")]
    pub battery_health: f64,
    #[serde(rename = "Engine Temperature")]
    pub engine_temperature: f64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether a dataset file was loaded
    pub dataset: String,
    /// Feature columns the model expects, in order
    pub model_features: Vec<String>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
        crate::handlers::metrics::get_metrics,
        crate::handlers::metrics::get_failures,
        crate::handlers::metrics::get_health_metrics,
    ),
    components(
        schemas(
            PredictionRequest,
            PredictionResponse,
            ErrorResponse,
            HealthResponse,
            ComponentMetrics,
            FailureCounts,
            HealthMetrics,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Maintenance prediction endpoints"),
        (name = "metrics", description = "Fleet dataset summary endpoints"),
    ),
    info(
        title = "Car Health API",
        description = "Predictive maintenance service behind the car health dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
