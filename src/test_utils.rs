use crate::dataset::Dataset;
use crate::predictor::LinearModel;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use moka::future::Cache;
use polars::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Model whose prediction is the plain sum of the features
pub fn sum_model() -> LinearModel {
    LinearModel::new(
        vec![
            "mileage_since_last_maintenance".to_string(),
            "engine_hours".to_string(),
            "average_speed".to_string(),
            "oil_quality_sensor".to_string(),
        ],
        vec![1.0, 1.0, 1.0, 1.0],
        0.0,
    )
    .expect("Failed to build test model")
}

/// Small fleet with every column the summary endpoints read
pub fn fleet_dataset() -> Dataset {
    let frame = df!(
        "Date" => ["2024-01-15", "2024-01-20", "2024-02-03", "2024-03-11", "2024-03-30"],
        "Maintenance Required" => [1, 1, 0, 1, 1],
        "Oil Pressure" => [30.0, 40.0, 35.0, 45.0, 50.0],
        "Tire Pressure" => [32.0, 31.0, 33.0, 30.0, 34.0],
        "Battery Health" => [80.0, 90.0, 70.0, 60.0, 100.0],
        "battery_health" => [80.0, 90.0, 70.0, 60.0, 100.0],
        "engine_temp" => [90.0, 95.0, 100.0, 85.0, 80.0]
    )
    .expect("Failed to build test dataset");
    Dataset::from_frame(frame)
}

/// Create AppState for testing
pub fn setup_test_app_state(dataset: Dataset) -> AppState {
    AppState {
        model: Arc::new(sum_model()),
        dataset: Arc::new(dataset),
        cache: Cache::new(100),
    }
}

/// Directory holding a stand-in dashboard page, unique per caller
pub fn static_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("carhealth-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create static dir");
    std::fs::write(dir.join("index.html"), "<h1>Car Health Dashboard</h1>")
        .expect("Failed to write index.html");
    dir
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub fn setup_test_app(dataset: Dataset) -> Router {
    create_router(setup_test_app_state(dataset), &static_dir("app"))
}
