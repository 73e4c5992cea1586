use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Message shown to the user whenever the upstream call does not succeed.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch data";

/// Application-specific error types.
///
/// Every variant describes a way the single outbound call can fail. Handlers
/// never recover from these locally; they mirror [`AppError::status_code`].
#[derive(Debug, Clone)]
pub enum AppError {
    /// Upstream answered with anything other than 200.
    UpstreamStatus(StatusCode),
    /// Upstream did not answer within the configured timeout.
    UpstreamTimeout(String),
    /// DNS, connect or other transport-level failure.
    UpstreamUnavailable(String),
    /// Upstream answered 200 but the body was not valid JSON.
    InvalidUpstreamBody(String),
}

impl AppError {
    /// Status code the handler mirrors back to its own caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamStatus(status) => *status,
            AppError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamUnavailable(_) | AppError::InvalidUpstreamBody(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Logs the failure at a level matching its severity.
    pub fn log(&self) {
        match self {
            AppError::UpstreamStatus(status) => {
                tracing::warn!("Upstream returned non-success status {}", status)
            }
            AppError::UpstreamTimeout(msg) => tracing::error!("Upstream timed out: {}", msg),
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {}", msg)
            }
            AppError::InvalidUpstreamBody(msg) => {
                tracing::error!("Invalid upstream body: {}", msg)
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamStatus(status) => write!(f, "Upstream returned {}", status),
            AppError::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            AppError::InvalidUpstreamBody(msg) => write!(f, "Invalid upstream body: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into the JSON error payload used by the search route.
    ///
    /// The body is `{"error": ..., "status_code": ...}` and the response
    /// status equals `status_code`.
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();

        let body = Json(json!({
            "error": FETCH_ERROR_MESSAGE,
            "status_code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Sorts a `reqwest::Error` into timeout, body or transport failure.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout(err.to_string())
        } else if err.is_decode() {
            AppError::InvalidUpstreamBody(err.to_string())
        } else {
            AppError::UpstreamUnavailable(err.to_string())
        }
    }
}
