//! Model catalog: read-through list/show with schema translation.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{ModelDetail, ModelSummary, OllamaPort};
use crate::services::GatewayError;

/// Uncached passthrough over the backend's tag-list and show endpoints.
#[derive(Clone)]
pub struct ModelCatalog {
    backend: Arc<dyn OllamaPort>,
}

impl ModelCatalog {
    pub fn new(backend: Arc<dyn OllamaPort>) -> Self {
        Self { backend }
    }

    /// List available models.
    ///
    /// Inherits the client's empty-list-on-non-200 behavior; only
    /// transport failures surface as errors.
    pub async fn list(&self) -> Result<Vec<ModelSummary>, GatewayError> {
        Ok(self.backend.list_models().await?)
    }

    /// Fetch details for one model. A backend 404 is a first-class
    /// `NotFound`; any other non-200 carries the backend status.
    pub async fn get(&self, name: &str) -> Result<ModelDetail, GatewayError> {
        debug!(model = %name, "show model");
        Ok(self.backend.show_model(name).await?)
    }
}
