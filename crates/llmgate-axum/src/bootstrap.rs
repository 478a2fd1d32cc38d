//! Composition root: wire the backend client to the core services and
//! run the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use llmgate_core::config::GatewayConfig;
use llmgate_core::ports::OllamaPort;
use llmgate_core::services::{InferenceGateway, ModelCatalog, ReadinessProbe, WarmupController};
use llmgate_ollama::OllamaClient;

use crate::routes::create_router;
use crate::state::{AppState, GatewayContext};

/// CORS policy for the router.
#[derive(Debug, Clone)]
pub enum CorsConfig {
    AllowAll,
    AllowOrigins(Vec<String>),
}

/// HTTP server settings, separate from backend settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub cors: CorsConfig,
    /// Run the startup warmup task. Disabled in tests and by flag.
    pub warmup: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors: CorsConfig::AllowAll,
            warmup: true,
        }
    }
}

/// Build the application state over the real Ollama HTTP client.
pub fn bootstrap(config: GatewayConfig) -> anyhow::Result<AppState> {
    let client = OllamaClient::new(&config).context("failed to build the Ollama client")?;
    Ok(bootstrap_with_backend(config, Arc::new(client)))
}

/// Build the application state over any backend implementation.
///
/// This is the seam integration tests use to substitute a fake.
pub fn bootstrap_with_backend(config: GatewayConfig, backend: Arc<dyn OllamaPort>) -> AppState {
    let probe = ReadinessProbe::new(backend.clone(), &config.model_name);
    let gateway = InferenceGateway::new(backend.clone(), &config);
    let catalog = ModelCatalog::new(backend.clone());

    Arc::new(GatewayContext {
        config,
        backend,
        probe,
        gateway,
        catalog,
    })
}

/// Bind the listener and serve until the process is stopped.
///
/// The warmup sequence runs as a background task so the socket accepts
/// connections immediately; `/health` reports `unhealthy` until the
/// backend shows up.
pub async fn start_server(state: AppState, server: ServerConfig) -> anyhow::Result<()> {
    if server.warmup {
        let controller = WarmupController::new(
            state.backend.clone(),
            state.probe.clone(),
            &state.config,
        );
        tokio::spawn(async move {
            controller.run().await;
        });
    }

    let router = create_router(state.clone(), &server.cors);
    let addr = format!("0.0.0.0:{}", server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        model = %state.config.model_name,
        backend = %state.config.ollama_base_url,
        "gateway listening"
    );

    axum::serve(listener, router)
        .await
        .context("server terminated unexpectedly")?;
    Ok(())
}
