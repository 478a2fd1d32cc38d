//! External request/response schemas.
//!
//! Validation happens here, before any backend call: a request that
//! fails these checks never reaches the inference gateway.

use serde::{Deserialize, Serialize};

use llmgate_core::types::{HealthState, HealthStatus, InferenceOutcome, InferenceRequest};

use crate::error::HttpError;

const DEFAULT_MAX_TOKENS: u32 = 512;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 0.9;

/// Body of `POST /inference`.
#[derive(Debug, Deserialize)]
pub struct InferenceRequestBody {
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    /// Accepted in the schema for compatibility, but only `false` is
    /// supported; `true` is rejected rather than silently ignored.
    #[serde(default)]
    pub stream: bool,
}

impl InferenceRequestBody {
    /// Apply defaults and enforce field constraints.
    pub fn validate(self) -> Result<InferenceRequest, HttpError> {
        if self.prompt.is_empty() {
            return Err(HttpError::BadRequest("prompt must not be empty".to_string()));
        }
        if self.stream {
            return Err(HttpError::BadRequest(
                "streaming responses are not supported; set stream to false".to_string(),
            ));
        }

        let max_tokens = self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens < 1 {
            return Err(HttpError::BadRequest(
                "max_tokens must be at least 1".to_string(),
            ));
        }

        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(HttpError::BadRequest(
                "temperature must be between 0 and 2".to_string(),
            ));
        }

        let top_p = self.top_p.unwrap_or(DEFAULT_TOP_P);
        if !(0.0..=1.0).contains(&top_p) {
            return Err(HttpError::BadRequest(
                "top_p must be between 0 and 1".to_string(),
            ));
        }

        Ok(InferenceRequest {
            prompt: self.prompt,
            max_tokens,
            temperature,
            top_p,
        })
    }
}

/// Body of a successful `POST /inference` reply.
///
/// Optional counters are serialized only when the backend supplied
/// them; an absent field is never rendered as zero.
#[derive(Debug, Serialize)]
pub struct InferenceResponseBody {
    pub text: String,
    pub model_name: String,
    pub created_at: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_duration_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_duration_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_duration_ns: Option<u64>,
}

impl From<InferenceOutcome> for InferenceResponseBody {
    fn from(outcome: InferenceOutcome) -> Self {
        Self {
            text: outcome.text,
            model_name: outcome.model_name,
            created_at: outcome.created_at,
            done: outcome.done,
            total_duration_ns: outcome.total_duration_ns,
            load_duration_ns: outcome.load_duration_ns,
            prompt_eval_count: outcome.prompt_eval_count,
            prompt_eval_duration_ns: outcome.prompt_eval_duration_ns,
            eval_count: outcome.eval_count,
            eval_duration_ns: outcome.eval_duration_ns,
        }
    }
}

/// Body of `GET /health`. Always returned with status 200; the health
/// classification lives in the payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
    pub ollama_status: String,
    pub available_models: Vec<String>,
}

impl From<HealthState> for HealthResponse {
    fn from(state: HealthState) -> Self {
        let ollama_status = if state.backend_reachable {
            "running"
        } else {
            "not responding"
        };
        Self {
            status: state.status,
            message: state.message,
            ollama_status: ollama_status.to_string(),
            available_models: state.available_models,
        }
    }
}

/// Body of `GET /` — service identity.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub model: String,
    pub status: String,
}
