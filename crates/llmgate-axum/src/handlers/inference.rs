//! Inference handler.

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::dto::{InferenceRequestBody, InferenceResponseBody};
use crate::error::HttpError;
use crate::state::AppState;

/// `POST /inference` — validate, relay to the backend, map the result.
pub async fn infer(
    State(state): State<AppState>,
    Json(body): Json<InferenceRequestBody>,
) -> Result<Json<InferenceResponseBody>, HttpError> {
    let request = body.validate()?;
    info!(
        model = %state.config.model_name,
        max_tokens = request.max_tokens,
        "POST /inference"
    );

    let outcome = state.gateway.infer(request).await?;
    Ok(Json(InferenceResponseBody::from(outcome)))
}
