//! Backend contract: the `OllamaPort` trait and its wire types.
//!
//! The port covers exactly the four backend operations the gateway
//! consumes. Implementations perform one network call per invocation
//! with an explicit deadline and never retry; retry policy belongs to
//! callers.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed failure taxonomy for backend calls.
///
/// Callers match exhaustively on this enum to decide the user-visible
/// status code; no failure is folded into a broad catch-all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// Connection-level failure: the backend process is not reachable.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The call exceeded its per-operation deadline.
    #[error("backend call timed out")]
    Timeout,

    /// The backend responded with a non-success status.
    #[error("backend returned status {status}: {body}")]
    Http {
        /// HTTP status code from the backend.
        status: u16,
        /// Raw response body, kept for diagnosability.
        body: String,
    },

    /// Backend 404 semantics for a named model.
    #[error("model '{0}' not found")]
    NotFound(String),

    /// The backend returned 200 but the body did not parse.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

/// One entry from `GET /api/tags`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelSummary {
    /// Model identifier, e.g. `gemma2:2b`.
    pub name: String,
}

/// Detailed model record assembled from `POST /api/show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDetail {
    pub name: String,
    /// Size on disk in bytes.
    pub size: u64,
    pub digest: String,
    /// Opaque structured metadata, passed through untouched.
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Sampling options forwarded to `POST /api/generate`.
///
/// The warmup call sends only `num_predict`; the sampling fields are
/// omitted from the wire when unset.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// Request body for `POST /api/generate`.
///
/// `stream` is always false: the gateway returns one complete response.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePayload {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Successful reply from `POST /api/generate`.
///
/// The timing/usage counters are optional on the wire; absence is
/// meaningful and must not collapse to zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateReply {
    pub response: String,
    pub model: String,
    pub created_at: String,
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    #[serde(default)]
    pub prompt_eval_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u32>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

/// The four backend operations consumed by the gateway.
#[async_trait]
pub trait OllamaPort: Send + Sync {
    /// `GET /api/version` — cheap reachability check.
    async fn version(&self) -> Result<(), BackendError>;

    /// `GET /api/tags` — list available models.
    ///
    /// A non-success status degrades to an empty list rather than an
    /// error; only transport failures surface.
    async fn list_models(&self) -> Result<Vec<ModelSummary>, BackendError>;

    /// `POST /api/show` — detailed record for one model.
    async fn show_model(&self, name: &str) -> Result<ModelDetail, BackendError>;

    /// `POST /api/generate` with an explicit deadline.
    ///
    /// The deadline is caller-supplied because the same operation runs
    /// under two policies: steady-state inference and startup warmup.
    async fn generate(
        &self,
        payload: &GeneratePayload,
        timeout: Duration,
    ) -> Result<GenerateReply, BackendError>;
}
