//! Blocking HTTP client for the inference API
//!
//! Used by the dashboard and the `predict` CLI subcommand. Calls are
//! synchronous and carry no request timeout: one request is in
//! flight at a time and an unresponsive server blocks the caller
//! until the OS gives up the connection.

use std::fmt;

use crate::api::{ErrorResponse, HealthResponse, PredictResponse};
use crate::error::{CatadorError, Result};
use crate::wine::WineFeatures;

/// What the health probe found out about the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Server answered 200 with the expected health body
    Online,
    /// Server answered, but not with a healthy 200
    Degraded(u16),
    /// Server did not answer at all
    Offline(String),
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Degraded(status) => write!(f, "degraded (HTTP {status})"),
            Self::Offline(_) => write!(f, "offline"),
        }
    }
}

/// Client for one inference server
#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: String,
}

impl PredictionClient {
    /// Create a client for the server at `base_url`
    ///
    /// A trailing slash on the URL is dropped so endpoint paths can
    /// be appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /` and classify the result
    ///
    /// Never fails: every outcome, including transport errors, maps
    /// onto a [`BackendStatus`] the dashboard can render.
    #[must_use]
    pub fn health(&self) -> BackendStatus {
        let url = format!("{}/", self.base_url);
        match ureq::get(&url).call() {
            Ok(response) => {
                if response.status() != 200 {
                    return BackendStatus::Degraded(response.status());
                }
                match response.into_json::<HealthResponse>() {
                    Ok(health) if health.status == "healthy" => BackendStatus::Online,
                    Ok(_) | Err(_) => BackendStatus::Degraded(200),
                }
            }
            Err(ureq::Error::Status(status, _)) => BackendStatus::Degraded(status),
            Err(err) => BackendStatus::Offline(err.to_string()),
        }
    }

    /// Submit one sample to `POST /predict` and return the class id
    ///
    /// Non-success statuses surface the server's `detail` message via
    /// [`CatadorError::UnexpectedStatus`], so a 422 names the field
    /// the server objected to.
    pub fn predict(&self, features: &WineFeatures) -> Result<u32> {
        let url = format!("{}/predict", self.base_url);
        match ureq::post(&url).send_json(features) {
            Ok(response) => {
                let reply: PredictResponse =
                    response
                        .into_json()
                        .map_err(|e| CatadorError::InvalidResponse {
                            reason: e.to_string(),
                        })?;
                Ok(reply.response)
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                let detail = serde_json::from_str::<ErrorResponse>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                Err(CatadorError::UnexpectedStatus { status, detail })
            }
            Err(err) => Err(CatadorError::Connection(err.to_string())),
        }
    }
}
