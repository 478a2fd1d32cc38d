//! Model catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use llmgate_core::ports::ModelDetail;

use crate::error::HttpError;
use crate::state::AppState;

/// `GET /models` — available model names.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, HttpError> {
    let models = state.catalog.list().await?;
    Ok(Json(models.into_iter().map(|m| m.name).collect()))
}

/// `GET /model/{name}` — detailed record for one model.
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ModelDetail>, HttpError> {
    Ok(Json(state.catalog.get(&name).await?))
}
