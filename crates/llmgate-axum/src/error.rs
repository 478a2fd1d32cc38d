//! Axum-specific error type and status-code mappings.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use llmgate_core::services::GatewayError;

/// HTTP-facing error for the gateway surface.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Invalid request input, rejected before any backend call.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend is not reachable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The backend call exceeded its deadline.
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    /// The backend answered with a non-success status, relayed verbatim.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            HttpError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Ollama request failed: {body}"),
            ),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GatewayError> for HttpError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unavailable => {
                HttpError::ServiceUnavailable("Ollama service is not available".to_string())
            }
            GatewayError::Timeout => HttpError::GatewayTimeout(
                "Request timed out. The model might be loading or the prompt is too complex."
                    .to_string(),
            ),
            GatewayError::Upstream { status, body } => HttpError::Upstream { status, body },
            GatewayError::NotFound(name) => {
                HttpError::NotFound(format!("Model '{name}' not found"))
            }
            GatewayError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
