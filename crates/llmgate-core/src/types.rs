//! Domain types shared between the services and the HTTP adapter.

use serde::Serialize;

/// Three-valued readiness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Backend reachable and the target model is available.
    Healthy,
    /// Backend reachable but the target model is missing.
    Partial,
    /// Backend unreachable.
    Unhealthy,
}

/// Snapshot produced by the readiness probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthState {
    pub status: HealthStatus,
    pub message: String,
    pub backend_reachable: bool,
    /// Empty by construction when the backend is unreachable.
    pub available_models: Vec<String>,
}

/// A validated inference request.
///
/// Constructed per call by the HTTP adapter after schema validation;
/// field constraints (non-empty prompt, bounded sampling parameters)
/// are enforced there, before this type exists.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

/// Result of a successful inference relay.
///
/// `created_at` is the backend-supplied timestamp, treated as opaque.
/// The counters mirror the backend reply: `None` means the backend
/// omitted the field, which is distinct from a reported zero.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceOutcome {
    pub text: String,
    pub model_name: String,
    pub created_at: String,
    pub done: bool,
    pub total_duration_ns: Option<u64>,
    pub load_duration_ns: Option<u64>,
    pub prompt_eval_count: Option<u32>,
    pub prompt_eval_duration_ns: Option<u64>,
    pub eval_count: Option<u32>,
    pub eval_duration_ns: Option<u64>,
}
