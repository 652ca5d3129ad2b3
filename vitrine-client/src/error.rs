//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Client error type
///
/// Every remote failure lands in exactly one bucket: local validation never
/// reaches this type, 404 maps to `NotFound`, 409 to `Conflict`, the other
/// 4xx to `Validation`, 5xx to `Server`, and transport failures split into
/// `Timeout` and `Network`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server rejected the payload (4xx)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource conflict (409), e.g. a duplicate name or code
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Server-side failure (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// No response within the configured bound
    #[error("Request timed out")]
    Timeout,

    /// Transport failure before any response arrived
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response body did not decode as the expected type
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request payload failed to serialize
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body shape the backend may attach; only the message is used.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Best human-readable message for a failed response body.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
    }
    body.trim().to_string()
}

/// Map a non-success status plus body to the error taxonomy.
pub(crate) fn status_error(status: http::StatusCode, body: &str) -> ClientError {
    let message = error_message(body);
    match status {
        http::StatusCode::NOT_FOUND => ClientError::NotFound(message),
        http::StatusCode::CONFLICT => ClientError::Conflict(message),
        s if s.is_client_error() => ClientError::Validation(message),
        _ => ClientError::Server(message),
    }
}
