//! Shared application state for the Axum adapter.

use std::sync::Arc;

use llmgate_core::config::GatewayConfig;
use llmgate_core::ports::OllamaPort;
use llmgate_core::services::{InferenceGateway, ModelCatalog, ReadinessProbe};

/// Everything a handler needs, built once at bootstrap.
///
/// Request handlers share no mutable state; concurrent requests only
/// read this snapshot.
pub struct GatewayContext {
    pub config: GatewayConfig,
    /// Kept for the warmup task spawned at server start.
    pub backend: Arc<dyn OllamaPort>,
    pub probe: ReadinessProbe,
    pub gateway: InferenceGateway,
    pub catalog: ModelCatalog,
}

/// State type injected into handlers via Axum `State`.
pub type AppState = Arc<GatewayContext>;
