//! Integration tests for the HTTP serving surface
//!
//! Drives the full router through `tower::ServiceExt::oneshot`:
//!
//! - Health endpoint contract (exact body shape)
//! - Prediction happy path against the demo artifact
//! - Validation rejections (missing field, non-positive values)
//! - Internal failures (absent or corrupt artifact)
//! - Per-request artifact loading (hot swap, failure recovery)
//! - Prometheus metrics endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

use catador::api::{create_router, AppState};
use catador::artifact::{DecisionTree, TreeNode, WineModel};
use catador::wine::FEATURE_NAMES;

/// Scenario sample from the original training data: a cultivar 0 wine
fn scenario_payload() -> Value {
    json!({
        "alcohol": 13.2,
        "malic_acid": 1.78,
        "ash": 2.14,
        "alcalinity_of_ash": 11.2,
        "magnesium": 100.0,
        "total_phenols": 2.65,
        "flavanoids": 2.76,
        "nonflavanoid_phenols": 0.26,
        "proanthocyanins": 1.28,
        "color_intensity": 4.38,
        "hue": 1.05,
        "od280_od315": 3.4,
        "proline": 1050.0
    })
}

/// Router backed by the demo artifact in a fresh temp dir
///
/// The TempDir must stay alive for the router's lifetime.
fn demo_router() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("wine_model.ctd");
    WineModel::demo().save(&path).expect("test");
    (create_router(AppState::new(path)), dir)
}

/// Router pointing at a path where no artifact exists
fn missing_artifact_router() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("missing.ctd");
    (create_router(AppState::new(path)), dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("test"),
        )
        .await
        .expect("test");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("test");
    (status, body.to_vec())
}

async fn post_predict(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .expect("test"),
        )
        .await
        .expect("test");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("test");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// Health endpoint
// ============================================================================

#[tokio::test]
async fn health_returns_exact_shape() {
    let (app, _dir) = demo_router();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).expect("test");
    // exact shape: one key, fixed value
    assert_eq!(value, json!({"status": "healthy"}));
}

#[tokio::test]
async fn health_does_not_touch_the_artifact() {
    // health must answer 200 even when predictions would fail
    let (app, _dir) = missing_artifact_router();
    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Prediction happy path
// ============================================================================

#[tokio::test]
async fn scenario_sample_classifies_as_class_zero() {
    let (app, _dir) = demo_router();
    let (status, body) = post_predict(app, scenario_payload().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": 0}));
}

#[tokio::test]
async fn prediction_is_always_one_of_three_classes() {
    let (app, _dir) = demo_router();
    let mut payload = scenario_payload();
    payload["proline"] = json!(420.0);
    payload["od280_od315"] = json!(1.9);
    payload["hue"] = json!(0.6);

    let (status, body) = post_predict(app, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let class = body["response"].as_u64().expect("test");
    assert!(class <= 2, "class id {class} out of range");
}

// ============================================================================
// Validation rejections
// ============================================================================

#[tokio::test]
async fn missing_field_yields_422_and_no_response_key() {
    let (app, _dir) = demo_router();
    let mut payload = scenario_payload();
    payload.as_object_mut().expect("test").remove("proline");

    let (status, body) = post_predict(app, payload.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("response").is_none());
    assert!(body.get("detail").is_some());
}

#[tokio::test]
async fn every_field_is_required() {
    for field in FEATURE_NAMES {
        let (app, _dir) = demo_router();
        let mut payload = scenario_payload();
        payload.as_object_mut().expect("test").remove(field);

        let (status, body) = post_predict(app, payload.to_string()).await;

        assert_eq!(
            status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "dropping {field} must be rejected"
        );
        assert!(body.get("response").is_none());
    }
}

#[tokio::test]
async fn negative_field_yields_422_naming_the_field() {
    let (app, _dir) = demo_router();
    let mut payload = scenario_payload();
    payload["proline"] = json!(-1.0);

    let (status, body) = post_predict(app, payload.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().expect("test");
    assert!(detail.contains("proline"), "detail was: {detail}");
}

#[tokio::test]
async fn zero_field_yields_422() {
    let (app, _dir) = demo_router();
    let mut payload = scenario_payload();
    payload["hue"] = json!(0.0);

    let (status, body) = post_predict(app, payload.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().expect("test").contains("hue"));
}

#[tokio::test]
async fn validation_runs_before_the_artifact_is_read() {
    // with no artifact on disk the only 4xx path a request can take
    // is validation, so a 422 here proves no model load was attempted
    let (app, _dir) = missing_artifact_router();
    let mut payload = scenario_payload();
    payload["flavanoids"] = json!(-2.76);

    let (status, _) = post_predict(app, payload.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (app, _dir) = demo_router();
    let (status, body) = post_predict(app, "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("detail").is_some());
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let (app, _dir) = demo_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .body(Body::from(scenario_payload().to_string()))
                .expect("test"),
        )
        .await
        .expect("test");

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ============================================================================
// Internal failures
// ============================================================================

#[tokio::test]
async fn missing_artifact_yields_500_with_path_in_detail() {
    let (app, _dir) = missing_artifact_router();
    let (status, body) = post_predict(app, scenario_payload().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().expect("test");
    assert!(detail.contains("cannot read model artifact"));
    assert!(detail.contains("missing.ctd"));
}

#[tokio::test]
async fn corrupt_artifact_yields_500() {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("garbage.ctd");
    std::fs::write(&path, b"GGUF this is not a ctd artifact").expect("test");
    let app = create_router(AppState::new(path));

    let (status, body) = post_predict(app, scenario_payload().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().expect("test");
    assert!(detail.contains("invalid artifact format"));
}

// ============================================================================
// Per-request artifact loading
// ============================================================================

#[tokio::test]
async fn swapping_the_artifact_changes_the_next_prediction() {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("wine_model.ctd");
    WineModel::demo().save(&path).expect("test");
    let state = AppState::new(&path);

    let (status, body) =
        post_predict(create_router(state.clone()), scenario_payload().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], json!(0));

    // overwrite with a degenerate model that always answers class 2
    let constant_model = WineModel {
        n_features: 13,
        n_classes: 3,
        feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
        importances: None,
        trees: vec![DecisionTree {
            nodes: vec![TreeNode::Leaf { class: 2 }],
        }],
    };
    constant_model.save(&path).expect("test");

    let (status, body) =
        post_predict(create_router(state), scenario_payload().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], json!(2));
}

#[tokio::test]
async fn server_recovers_once_the_artifact_appears() {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("late.ctd");
    let state = AppState::new(&path);

    let (status, _) =
        post_predict(create_router(state.clone()), scenario_payload().to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    WineModel::demo().save(&path).expect("test");

    let (status, body) =
        post_predict(create_router(state), scenario_payload().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], json!(0));
}

// ============================================================================
// Metrics endpoint
// ============================================================================

#[tokio::test]
async fn metrics_endpoint_counts_every_outcome() {
    let dir = tempfile::tempdir().expect("test");
    let path = dir.path().join("wine_model.ctd");
    WineModel::demo().save(&path).expect("test");
    let state = AppState::new(path);

    // one success
    let (status, _) =
        post_predict(create_router(state.clone()), scenario_payload().to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // one validation rejection
    let mut bad = scenario_payload();
    bad["ash"] = json!(-1.0);
    let (status, _) = post_predict(create_router(state.clone()), bad.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = get(create_router(state), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).expect("test");
    assert!(text.contains("catador_requests_total 2"));
    assert!(text.contains("catador_requests_successful 1"));
    assert!(text.contains("catador_requests_rejected 1"));
    assert!(text.contains("# TYPE catador_requests_total counter"));
}
