//! HTTP client for the remote prediction service.
//!
//! The service exposes two endpoints: `GET /health` for liveness and
//! `POST /predict`, which takes a JSON [`NetworkSample`] and answers with the
//! predicted issue type.

use std::time::Duration;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::http_client;
use crate::telemetry::NetworkSample;

pub const HEALTH_PATH: &str = "/health";
pub const PREDICT_PATH: &str = "/predict";
/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while making the prediction";

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Body returned by `/predict`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    pub predicted_issue_type: String,
}

/// Why a prediction request did not produce a result.
///
/// `Display` is the text shown to the operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The request never completed (DNS, connect, timeout, reset).
    #[error("{}", message_or_fallback(.0))]
    Transport(String),
    /// The response body was unreadable or not the expected JSON.
    #[error("{}", message_or_fallback(.0))]
    Decode(String),
}

/// Why a liveness check failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HealthCheckError {
    #[error("Health endpoint returned status {0}")]
    Status(u16),
    #[error("Health endpoint unreachable: {0}")]
    Transport(String),
}

fn message_or_fallback(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE
    } else {
        message
    }
}

/// Operations the controller needs from the prediction service.
///
/// Calls block; the controller runs them on worker threads.
pub trait PredictionApi: Send + Sync {
    /// One bounded reachability check against the health endpoint.
    fn check_health(&self) -> Result<(), HealthCheckError>;

    /// Submit `sample` and return the service's verdict.
    fn predict(&self, sample: &NetworkSample) -> Result<PredictionResponse, PredictError>;
}

/// [`PredictionApi`] over HTTP/JSON using the shared agent.
#[derive(Clone, Debug)]
pub struct HttpPredictionApi {
    base_url: String,
    health_timeout: Duration,
}

impl HttpPredictionApi {
    /// `base_url` must not end with a slash; see [`crate::config::normalize_base_url`].
    pub fn new(base_url: impl Into<String>, health_timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            health_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.health_timeout)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl PredictionApi for HttpPredictionApi {
    fn check_health(&self) -> Result<(), HealthCheckError> {
        let url = self.endpoint(HEALTH_PATH);
        match http_client::agent()
            .get(&url)
            .timeout(self.health_timeout)
            .call()
        {
            Ok(response) if http_client::is_success(response.status()) => Ok(()),
            Ok(response) => Err(HealthCheckError::Status(response.status())),
            Err(ureq::Error::Status(code, _)) => Err(HealthCheckError::Status(code)),
            Err(ureq::Error::Transport(err)) => Err(HealthCheckError::Transport(err.to_string())),
        }
    }

    fn predict(&self, sample: &NetworkSample) -> Result<PredictionResponse, PredictError> {
        let url = self.endpoint(PREDICT_PATH);
        let request = http_client::agent()
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(sample) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(PredictError::Status(code)),
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictError::Transport(err.to_string()));
            }
        };
        if !http_client::is_success(response.status()) {
            return Err(PredictError::Status(response.status()));
        }

        let body = http_client::read_response_text(response, MAX_RESPONSE_BYTES)
            .map_err(|err| PredictError::Decode(err.to_string()))?;
        parse_prediction_response(&body)
    }
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Decode("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Decode(err.to_string()))
}
