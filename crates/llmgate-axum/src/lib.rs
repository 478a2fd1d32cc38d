//! Axum web adapter for llmgate.
//!
//! Owns the external HTTP contract: DTO validation, route table,
//! error-to-status mapping, and the composition root that wires the
//! reqwest Ollama client into the core services.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{CorsConfig, ServerConfig, bootstrap, bootstrap_with_backend, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::{AppState, GatewayContext};
