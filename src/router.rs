use crate::handlers::{
    health::health_check,
    metrics::{get_failures, get_health_metrics, get_metrics},
    predict::predict,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware.
///
/// Anything that is not an API route is served from `static_dir`, which is
/// where the built dashboard lives.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction
        .route("/predict", post(predict))
        // Dataset summaries
        .route("/metrics", get(get_metrics))
        .route("/failures", get(get_failures))
        .route("/health-metrics", get(get_health_metrics))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Dashboard assets
        .fallback_service(ServeDir::new(static_dir))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
