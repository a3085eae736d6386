//! HTTP API for wine cultivar inference
//!
//! Endpoints:
//! - `GET /` - health check, returns `{"status": "healthy"}`
//! - `POST /predict` - classify one wine sample, returns `{"response": class_id}`
//! - `GET /metrics` - Prometheus-formatted request metrics
//!
//! Error contract: validation problems answer 422 and internal
//! problems answer 500, both with a `{"detail": "..."}` body so
//! clients have one place to look for the reason.

use std::path::{Path, PathBuf};
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::artifact::{Classifier, WineModel};
use crate::metrics::MetricsCollector;
use crate::wine::WineFeatures;

/// Shared state for API handlers
///
/// Holds the artifact path, not the model: the artifact is read from
/// disk on every prediction, so replacing the file on disk changes
/// what the next request serves without a restart.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where the .ctd artifact lives
    artifact_path: PathBuf,
    /// Request counters and latency accounting
    metrics: MetricsCollector,
}

impl AppState {
    /// Create state serving the artifact at `artifact_path`
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            metrics: MetricsCollector::new(),
        }
    }

    /// Path of the artifact this state serves
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Metrics collector shared with the handlers
    #[must_use]
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" when the process can answer at all
    pub status: String,
}

/// Successful prediction response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted cultivar class id
    pub response: u32,
}

/// Error response body for 4xx and 5xx answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub detail: String,
}

/// Create the API router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/predict", post(predict_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Metrics handler - returns Prometheus-formatted metrics
async fn metrics_handler(State(state): State<AppState>) -> String {
    state.metrics.to_prometheus()
}

/// Prediction handler
///
/// The body must deserialize into the full thirteen-field wine schema
/// and every measurement must be strictly positive; both checks run
/// before the artifact is touched, so a rejected request never costs
/// a disk read. The artifact is then loaded fresh and asked for one
/// class id.
async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<WineFeatures>, JsonRejection>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let features = match payload {
        Ok(Json(features)) => features,
        Err(rejection) => {
            state.metrics.record_rejection();
            log::warn!("rejected prediction request: {}", rejection.body_text());
            return Err((
                rejection.status(),
                Json(ErrorResponse {
                    detail: rejection.body_text(),
                }),
            ));
        }
    };

    if let Err(field) = features.validate() {
        state.metrics.record_rejection();
        log::warn!("rejected prediction request: {field} not strictly positive");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                detail: format!("{field} must be a strictly positive number"),
            }),
        ));
    }

    let start = Instant::now();

    let model = WineModel::load(&state.artifact_path).map_err(|e| {
        state.metrics.record_failure();
        log::error!("prediction failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: e.to_string(),
            }),
        )
    })?;

    let predictions = model.predict(&[features.to_row()]).map_err(|e| {
        state.metrics.record_failure();
        log::error!("prediction failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: e.to_string(),
            }),
        )
    })?;

    let class = predictions.first().copied().ok_or_else(|| {
        state.metrics.record_failure();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "model returned no prediction".to_string(),
            }),
        )
    })?;

    state.metrics.record_success(start.elapsed());
    Ok(Json(PredictResponse { response: class }))
}
