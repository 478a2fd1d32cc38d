//! One-shot startup warmup: wait for the backend, then force the
//! target model into memory with a minimal generate call.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::GatewayConfig;
use crate::ports::{GenerateOptions, GeneratePayload, OllamaPort};
use crate::services::ReadinessProbe;
use crate::types::HealthState;

/// Result of the bounded readiness poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Backend became reachable on the given attempt (1-based).
    ReachableAfter(u32),
    /// All attempts were used without reaching the backend.
    ExhaustedRetries,
}

/// Final disposition of the warmup run. Every variant is non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupOutcome {
    /// The model answered the warmup generate call.
    Warmed,
    /// The warmup generate call failed; the model will load lazily.
    WarmupFailed,
    /// Backend is up but the target model is not installed.
    ModelMissing,
    /// The backend never became reachable within the retry budget.
    BackendNeverReady,
}

/// Runs exactly once at process startup, in the background relative to
/// the listening socket. Nothing here aborts startup: the service keeps
/// running in `unhealthy` state if the backend never shows up.
pub struct WarmupController {
    backend: Arc<dyn OllamaPort>,
    probe: ReadinessProbe,
    model_name: String,
    max_retries: u32,
    retry_delay: Duration,
    warmup_timeout: Duration,
}

impl WarmupController {
    pub fn new(backend: Arc<dyn OllamaPort>, probe: ReadinessProbe, config: &GatewayConfig) -> Self {
        Self {
            backend,
            probe,
            model_name: config.model_name.clone(),
            max_retries: config.warmup_max_retries,
            retry_delay: config.warmup_retry_delay,
            warmup_timeout: config.timeouts.warmup,
        }
    }

    /// Poll until the backend is reachable or the retry budget runs out.
    ///
    /// Reachability alone ends the poll; model availability is checked
    /// afterwards. Worst-case duration is `max_retries * retry_delay`.
    async fn poll_until_reachable(&self) -> (PollOutcome, Option<HealthState>) {
        for attempt in 1..=self.max_retries {
            let state = self.probe.check().await;
            if state.backend_reachable {
                return (PollOutcome::ReachableAfter(attempt), Some(state));
            }
            info!(
                "Waiting for Ollama service... ({}/{})",
                attempt, self.max_retries
            );
            sleep(self.retry_delay).await;
        }
        (PollOutcome::ExhaustedRetries, None)
    }

    /// Run the warmup sequence. Never panics, never returns an error.
    pub async fn run(&self) -> WarmupOutcome {
        let (outcome, state) = self.poll_until_reachable().await;

        let state = match (outcome, state) {
            (PollOutcome::ExhaustedRetries, _) | (_, None) => {
                error!(
                    retries = self.max_retries,
                    "Ollama service did not become ready in time; continuing unhealthy"
                );
                return WarmupOutcome::BackendNeverReady;
            }
            (PollOutcome::ReachableAfter(n), Some(state)) => {
                info!(attempts = n, "Ollama service is ready");
                state
            }
        };

        if !state.available_models.iter().any(|m| m == &self.model_name) {
            warn!(
                model = %self.model_name,
                available = ?state.available_models,
                "target model is not available; skipping warmup"
            );
            return WarmupOutcome::ModelMissing;
        }

        info!(model = %self.model_name, "warming up the model");
        let payload = GeneratePayload {
            model: self.model_name.clone(),
            prompt: "Hello".to_string(),
            stream: false,
            options: GenerateOptions {
                num_predict: 1,
                temperature: None,
                top_p: None,
            },
        };

        match self.backend.generate(&payload, self.warmup_timeout).await {
            Ok(_) => {
                info!("model is warmed up and ready");
                WarmupOutcome::Warmed
            }
            Err(e) => {
                warn!("model warmup failed, service will continue: {e}");
                WarmupOutcome::WarmupFailed
            }
        }
    }
}
