//! Service identity and health handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::{HealthResponse, ServiceInfo};
use crate::state::AppState;

/// `GET /` — service identity.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "LLM Inference Gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.config.model_name.clone(),
        status: "running".to_string(),
    })
}

/// `GET /health` — 3-state readiness classification.
///
/// Always answers 200; the classification is carried in the body so
/// load balancers and humans read the same payload.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.probe.check().await;
    Json(HealthResponse::from(health))
}
