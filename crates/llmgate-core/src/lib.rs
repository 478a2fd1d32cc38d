//! Core domain logic for the llmgate inference gateway.
//!
//! This crate holds the pieces that do not depend on a concrete HTTP
//! stack: the gateway configuration, the `OllamaPort` backend contract,
//! the closed backend error taxonomy, and the orchestration services
//! (readiness probe, warmup controller, inference gateway, model
//! catalog). Adapters live in `llmgate-ollama` (reqwest client) and
//! `llmgate-axum` (web server).

pub mod config;
pub mod ports;
pub mod services;
pub mod types;

pub use config::{BackendTimeouts, GatewayConfig};
pub use ports::{
    BackendError, GenerateOptions, GeneratePayload, GenerateReply, ModelDetail, ModelSummary,
    OllamaPort,
};
pub use services::{
    GatewayError, InferenceGateway, ModelCatalog, PollOutcome, ReadinessProbe, WarmupController,
    WarmupOutcome,
};
pub use types::{HealthState, HealthStatus, InferenceOutcome, InferenceRequest};
