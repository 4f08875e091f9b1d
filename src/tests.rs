use crate::dataset::Dataset;
use crate::router::create_router;
use crate::schemas::{ComponentMetrics, FailureCounts, HealthMetrics, HealthResponse};
use crate::test_utils::{fleet_dataset, init_test_tracing, setup_test_app, setup_test_app_state, static_dir};
use axum::http::StatusCode;
use axum_test::TestServer;
use common::{ErrorResponse, PredictionResponse};
use serde_json::json;

fn server(dataset: Dataset) -> TestServer {
    TestServer::new(setup_test_app(dataset)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let _guard = init_test_tracing();
    let server = server(fleet_dataset());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.dataset, "loaded (5 rows)");
    assert_eq!(body.model_features.len(), 4);
    assert_eq!(body.model_features[0], "mileage_since_last_maintenance");
}

#[tokio::test]
async fn test_health_check_without_dataset() {
    let server = server(Dataset::default());

    let body: HealthResponse = server.get("/health").await.json();

    assert_eq!(body.dataset, "missing");
}

#[tokio::test]
async fn test_predict_truncates_to_whole_days() {
    let _guard = init_test_tracing();
    let server = server(fleet_dataset());

    let response = server
        .post("/predict")
        .json(&json!({ "features": [10, 20, 5, 7.9] }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: PredictionResponse = response.json();
    assert_eq!(body.prediction, 42.0);
}

#[tokio::test]
async fn test_predict_accepts_dashboard_request() {
    let server = server(fleet_dataset());

    let request = common::PredictionRequest::from([65.0, 80.0, 90.0, 1.0]);
    let response = server.post("/predict").json(&request).await;

    response.assert_status(StatusCode::OK);
    let body: PredictionResponse = response.json();
    assert_eq!(body.prediction, 236.0);
}

#[tokio::test]
async fn test_predict_rejects_missing_features() {
    let server = server(fleet_dataset());

    let response = server.post("/predict").json(&json!({ "values": [1, 2, 3, 4] })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Invalid input, features must be a list");
    assert_eq!(body.code, "INVALID_INPUT");
    assert!(!body.success);
}

#[tokio::test]
async fn test_predict_rejects_non_list_features() {
    let server = server(fleet_dataset());

    let response = server.post("/predict").json(&json!({ "features": 42 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_rejects_non_numeric_feature() {
    let server = server(fleet_dataset());

    let response = server
        .post("/predict")
        .json(&json!({ "features": [1, 2, "three", 4] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Invalid input, feature 2 is not a number");
}

#[tokio::test]
async fn test_predict_rejects_non_json_body() {
    let server = server(fleet_dataset());

    let response = server.post("/predict").text("features=1,2,3,4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "INVALID_INPUT");
}

#[tokio::test]
async fn test_predict_wrong_feature_count_is_model_error() {
    let server = server(fleet_dataset());

    let response = server.post("/predict").json(&json!({ "features": [1, 2, 3] })).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "PREDICTION_ERROR");
    assert_eq!(body.error, "Expected 4 features, got 3");
}

#[tokio::test]
async fn test_predict_overflow_is_model_error() {
    let server = server(fleet_dataset());

    let response = server
        .post("/predict")
        .json(&json!({ "features": [1e308, 1e308, 1e308, 1e308] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_metrics() {
    let server = server(fleet_dataset());

    let response = server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let raw: serde_json::Value = response.json();
    assert_eq!(raw["Oil Pressure"], 40.0);
    let body: ComponentMetrics = response.json();
    assert_eq!(body.tire_pressure, 32.0);
    assert_eq!(body.battery_health, 80.0);
}

#[tokio::test]
async fn test_get_metrics_missing_columns() {
    let server = server(Dataset::default());

    let response = server.get("/metrics").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Required columns missing in dataset");
    assert_eq!(body.code, "MISSING_COLUMNS");
}

#[tokio::test]
async fn test_get_failures() {
    let server = server(fleet_dataset());

    let response = server.get("/failures").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "Jan": 2, "Mar": 2 }));
    let body: FailureCounts = response.json();
    assert_eq!(body.0.keys().collect::<Vec<_>>(), vec!["Jan", "Mar"]);
}

#[tokio::test]
async fn test_get_failures_missing_columns() {
    let server = server(Dataset::default());

    server.get("/failures").await.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_health_metrics_defaults_absent_sensors_to_zero() {
    let server = server(fleet_dataset());

    let response = server.get("/health-metrics").await;

    response.assert_status(StatusCode::OK);
    let body: HealthMetrics = response.json();
    assert_eq!(body.average_oil_pressure, 0.0);
    assert_eq!(body.average_tire_pressure, 0.0);
    assert_eq!(body.battery_health, 80.0);
    assert_eq!(body.engine_temperature, 90.0);
}

#[tokio::test]
async fn test_get_health_metrics_empty_dataset() {
    let server = server(Dataset::default());

    let response = server.get("/health-metrics").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({
        "Average Oil Pressure": 0.0,
        "Average Tire Pressure": 0.0,
        "Battery Health": 0.0,
        "Engine Temperature": 0.0
    }));
}

#[tokio::test]
async fn test_summaries_are_cached() {
    let state = setup_test_app_state(fleet_dataset());
    let cache = state.cache.clone();
    let server = TestServer::new(create_router(state, &static_dir("cache"))).unwrap();

    assert!(cache.get("metrics").await.is_none());
    server.get("/metrics").await.assert_status(StatusCode::OK);
    server.get("/failures").await.assert_status(StatusCode::OK);

    assert!(cache.get("metrics").await.is_some());
    assert!(cache.get("failures").await.is_some());
    assert!(cache.get("health-metrics").await.is_none());

    let second: ComponentMetrics = server.get("/metrics").await.json();
    assert_eq!(second.oil_pressure, 40.0);
}

#[tokio::test]
async fn test_dashboard_served_from_static_dir() {
    let server = server(fleet_dataset());

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("Car Health Dashboard"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = server(fleet_dataset());

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/predict"]["post"].is_object());
    assert!(doc["paths"]["/health-metrics"]["get"].is_object());
}
