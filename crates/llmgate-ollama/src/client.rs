//! HTTP client for the Ollama backend.
//!
//! One network call per operation, each with its own deadline. No
//! retries live here; callers own retry policy. Failure classification
//! (unreachable vs timeout vs HTTP error) happens at this boundary so
//! callers can match exhaustively on `BackendError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use llmgate_core::config::{BackendTimeouts, GatewayConfig};
use llmgate_core::ports::{
    BackendError, GeneratePayload, GenerateReply, ModelDetail, ModelSummary, OllamaPort,
};

/// Reply shape of `GET /api/tags`.
#[derive(Debug, Deserialize)]
struct TagsReply {
    #[serde(default)]
    models: Vec<ModelSummary>,
}

/// Reply shape of `POST /api/show`. The backend does not echo the model
/// name at the top level; it may appear inside `details`.
#[derive(Debug, Deserialize)]
struct ShowReply {
    #[serde(default)]
    size: u64,
    #[serde(default)]
    digest: String,
    #[serde(default)]
    details: serde_json::Map<String, serde_json::Value>,
}

/// Production `OllamaPort` implementation.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    timeouts: BackendTimeouts,
}

impl OllamaClient {
    /// Build a client from the gateway configuration.
    ///
    /// Connection pooling is left to reqwest defaults; per-call timeout
    /// semantics are preserved by attaching the deadline to each
    /// request rather than to the pooled client.
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.ollama_base_url.trim_end_matches('/').to_string(),
            timeouts: config.timeouts,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Classify a reqwest transport error into the closed taxonomy.
fn classify(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else if err.is_decode() {
        BackendError::InvalidResponse(err.to_string())
    } else {
        // Connection refusal and any other transport-level failure both
        // mean the backend is not usable from here.
        BackendError::Unreachable(err.to_string())
    }
}

/// Drain a non-success response into an `Http` error, keeping the body.
async fn http_error(response: reqwest::Response) -> BackendError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    BackendError::Http { status, body }
}

#[async_trait]
impl OllamaPort for OllamaClient {
    async fn version(&self) -> Result<(), BackendError> {
        let response = self
            .http
            .get(self.api_url("/api/version"))
            .timeout(self.timeouts.version)
            .send()
            .await
            .map_err(classify)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelSummary>, BackendError> {
        let response = self
            .http
            .get(self.api_url("/api/tags"))
            .timeout(self.timeouts.list)
            .send()
            .await
            .map_err(classify)?;

        // Absence of models is not fatal to callers: any non-200 here
        // degrades to an empty list.
        if !response.status().is_success() {
            warn!(status = %response.status(), "tag list returned non-success, treating as empty");
            return Ok(Vec::new());
        }

        let reply: TagsReply = response.json().await.map_err(classify)?;
        Ok(reply.models)
    }

    async fn show_model(&self, name: &str) -> Result<ModelDetail, BackendError> {
        debug!(model = %name, "POST /api/show");
        let response = self
            .http
            .post(self.api_url("/api/show"))
            .timeout(self.timeouts.show)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(classify)?;

        if response.status().as_u16() == 404 {
            return Err(BackendError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let reply: ShowReply = response.json().await.map_err(classify)?;
        let detail_name = reply
            .details
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(name)
            .to_string();

        Ok(ModelDetail {
            name: detail_name,
            size: reply.size,
            digest: reply.digest,
            details: reply.details,
        })
    }

    async fn generate(
        &self,
        payload: &GeneratePayload,
        timeout: Duration,
    ) -> Result<GenerateReply, BackendError> {
        debug!(model = %payload.model, "POST /api/generate");
        let response = self
            .http
            .post(self.api_url("/api/generate"))
            .timeout(timeout)
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        response.json().await.map_err(classify)
    }
}
