//! Readiness probe: classifies backend health into a 3-state model.

use std::sync::Arc;

use tracing::debug;

use crate::ports::OllamaPort;
use crate::types::{HealthState, HealthStatus};

/// Single-shot, side-effect-free health check.
///
/// Safe to call concurrently and repeatedly; it backs both the external
/// `/health` endpoint and the startup warmup poll.
#[derive(Clone)]
pub struct ReadinessProbe {
    backend: Arc<dyn OllamaPort>,
    model_name: String,
}

impl ReadinessProbe {
    pub fn new(backend: Arc<dyn OllamaPort>, model_name: impl Into<String>) -> Self {
        Self {
            backend,
            model_name: model_name.into(),
        }
    }

    /// Classify current backend health.
    ///
    /// A version-check failure of any kind means unreachable. Once the
    /// version check has proven reachability, a tag-list failure only
    /// degrades to an empty model list, never to `Unhealthy`.
    pub async fn check(&self) -> HealthState {
        if let Err(e) = self.backend.version().await {
            debug!("version check failed: {e}");
            return HealthState {
                status: HealthStatus::Unhealthy,
                message: "Ollama service is not responding".to_string(),
                backend_reachable: false,
                available_models: Vec::new(),
            };
        }

        let available_models = match self.backend.list_models().await {
            Ok(models) => models.into_iter().map(|m| m.name).collect::<Vec<_>>(),
            Err(e) => {
                debug!("tag list failed after successful version check: {e}");
                Vec::new()
            }
        };

        if available_models.iter().any(|m| m == &self.model_name) {
            HealthState {
                status: HealthStatus::Healthy,
                message: "Service is running and model is available".to_string(),
                backend_reachable: true,
                available_models,
            }
        } else {
            HealthState {
                status: HealthStatus::Partial,
                message: format!("Ollama is running but {} is not available", self.model_name),
                backend_reachable: true,
                available_models,
            }
        }
    }
}
