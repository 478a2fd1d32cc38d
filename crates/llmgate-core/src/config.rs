//! Gateway configuration.
//!
//! A single immutable snapshot built at startup and injected into every
//! component. Nothing mutates it after construction.

use std::time::Duration;

/// Per-operation deadlines for backend calls.
///
/// Each outbound call carries its own independent timeout; timeouts are
/// never shared across retries or requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    /// `GET /api/version` deadline.
    pub version: Duration,
    /// `GET /api/tags` deadline.
    pub list: Duration,
    /// `POST /api/show` deadline.
    pub show: Duration,
    /// `POST /api/generate` deadline for real inference traffic.
    pub generate: Duration,
    /// `POST /api/generate` deadline for the startup warmup call.
    pub warmup: Duration,
}

impl Default for BackendTimeouts {
    fn default() -> Self {
        Self {
            version: Duration::from_secs(5),
            list: Duration::from_secs(10),
            show: Duration::from_secs(10),
            generate: Duration::from_secs(60),
            warmup: Duration::from_secs(30),
        }
    }
}

/// Process-wide gateway configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the Ollama backend, e.g. `http://localhost:11434`.
    pub ollama_base_url: String,
    /// The single model this gateway serves.
    pub model_name: String,
    /// Maximum readiness poll attempts at startup.
    pub warmup_max_retries: u32,
    /// Delay between readiness poll attempts.
    pub warmup_retry_delay: Duration,
    /// Deadlines for the four backend operations.
    pub timeouts: BackendTimeouts,
}

impl GatewayConfig {
    /// Create a configuration with default warmup policy and timeouts.
    pub fn new(ollama_base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            ollama_base_url: ollama_base_url.into(),
            model_name: model_name.into(),
            warmup_max_retries: 30,
            warmup_retry_delay: Duration::from_secs(2),
            timeouts: BackendTimeouts::default(),
        }
    }

    /// Override the warmup polling policy.
    #[must_use]
    pub fn with_warmup_policy(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.warmup_max_retries = max_retries;
        self.warmup_retry_delay = retry_delay;
        self
    }
}
