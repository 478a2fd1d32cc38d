//! Service-level error type.
//!
//! `GatewayError` is what the HTTP adapter maps to status codes. It is
//! derived from `BackendError` by a fixed mapping; the only exception
//! is the reachability gate in the inference path, which folds every
//! failure kind into `Unavailable`.

use thiserror::Error;

use crate::ports::BackendError;

/// User-visible failure categories for gateway operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend is not reachable.
    #[error("Ollama service is not available")]
    Unavailable,

    /// The backend call exceeded its deadline.
    #[error("request timed out; the model may be loading or the prompt is too complex")]
    Timeout,

    /// The backend responded with a non-success status, passed through.
    #[error("Ollama request failed with status {status}: {body}")]
    Upstream {
        /// Backend status, relayed verbatim to the client.
        status: u16,
        /// Backend body, kept as diagnostic detail.
        body: String,
    },

    /// The named model does not exist on the backend.
    #[error("model '{0}' not found")]
    NotFound(String),

    /// Unexpected internal failure (e.g. malformed backend payload).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<BackendError> for GatewayError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unreachable(_) => GatewayError::Unavailable,
            BackendError::Timeout => GatewayError::Timeout,
            BackendError::Http { status, body } => GatewayError::Upstream { status, body },
            BackendError::NotFound(name) => GatewayError::NotFound(name),
            BackendError::InvalidResponse(msg) => GatewayError::Internal(msg),
        }
    }
}
