//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap; everything below it works against the backend port.

use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use llmgate_axum::{CorsConfig, ServerConfig, bootstrap, start_server};
use llmgate_core::config::GatewayConfig;

/// HTTP gateway in front of a local Ollama instance.
#[derive(Debug, Parser)]
#[command(name = "llmgate", version, about)]
struct Cli {
    /// Port the gateway listens on.
    #[arg(long, env = "LLMGATE_PORT", default_value_t = 8000)]
    port: u16,

    /// Base URL of the Ollama backend.
    #[arg(long, env = "LLMGATE_OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Model served by this gateway.
    #[arg(long, env = "LLMGATE_MODEL", default_value = "gemma2:2b")]
    model: String,

    /// Startup poll attempts before giving up on the backend.
    #[arg(long, env = "LLMGATE_WARMUP_RETRIES", default_value_t = 30)]
    warmup_retries: u32,

    /// Seconds between startup poll attempts.
    #[arg(long, env = "LLMGATE_WARMUP_DELAY_SECS", default_value_t = 2)]
    warmup_delay_secs: u64,

    /// Skip the startup warmup; the model loads on first request.
    #[arg(long)]
    no_warmup: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig::new(&cli.ollama_url, &cli.model).with_warmup_policy(
        cli.warmup_retries,
        Duration::from_secs(cli.warmup_delay_secs),
    );

    info!(
        model = %config.model_name,
        backend = %config.ollama_base_url,
        port = cli.port,
        "starting llmgate"
    );

    let state = bootstrap(config)?;
    let server = ServerConfig {
        port: cli.port,
        cors: CorsConfig::AllowAll,
        warmup: !cli.no_warmup,
    };

    start_server(state, server).await
}
