use crate::schemas::ApiDoc;
use utoipa::openapi::{schema::Schema, RefOr};
use utoipa::OpenApi;

fn object_properties(name: &str) -> Vec<String> {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.expect("components");
    match components.schemas.get(name) {
        Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
        _ => panic!("{} should be an object schema", name),
    }
}

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    for name in [
        "PredictionRequest",
        "PredictionResponse",
        "ErrorResponse",
        "HealthResponse",
        "ComponentMetrics",
        "FailureCounts",
        "HealthMetrics",
    ] {
        assert!(components.schemas.contains_key(name), "missing schema {}", name);
    }

    assert!(serde_json::to_string(&openapi).is_ok());
}

#[test]
fn test_all_routes_documented() {
    let openapi = ApiDoc::openapi();

    for path in ["/health", "/predict", "/metrics", "/failures", "/health-metrics"] {
        assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
    }
}

#[test]
fn test_error_response_schema_structure() {
    let properties = object_properties("ErrorResponse");

    assert!(properties.contains(&"error".to_string()));
    assert!(properties.contains(&"code".to_string()));
    assert!(properties.contains(&"success".to_string()));
}

#[test]
fn test_prediction_schemas_structure() {
    assert_eq!(object_properties("PredictionRequest"), vec!["features".to_string()]);
    assert_eq!(object_properties("PredictionResponse"), vec!["prediction".to_string()]);
}

#[test]
fn test_summary_schemas_use_display_names() {
    let properties = object_properties("ComponentMetrics");

    assert!(properties.contains(&"Oil Pressure".to_string()));
    assert!(properties.contains(&"Tire Pressure".to_string()));
    assert!(properties.contains(&"Battery Health".to_string()));
}
