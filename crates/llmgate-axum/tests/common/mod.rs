//! Shared test fixtures: an in-memory backend and request helpers.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use llmgate_core::ports::{
    BackendError, GeneratePayload, GenerateReply, ModelDetail, ModelSummary, OllamaPort,
};

/// In-memory stand-in for the Ollama HTTP client. Each operation
/// returns a preconfigured result; `generate` also records the payload
/// it was called with.
pub struct FakeOllama {
    version_result: Result<(), BackendError>,
    list_result: Result<Vec<ModelSummary>, BackendError>,
    show_result: Result<ModelDetail, BackendError>,
    generate_result: Result<GenerateReply, BackendError>,
    pub last_payload: Mutex<Option<GeneratePayload>>,
}

impl FakeOllama {
    /// Backend up with the given models installed.
    pub fn reachable_with(models: &[&str]) -> Self {
        Self {
            version_result: Ok(()),
            list_result: Ok(models
                .iter()
                .map(|name| ModelSummary {
                    name: (*name).to_string(),
                })
                .collect()),
            show_result: Ok(sample_detail("gemma2:2b")),
            generate_result: Ok(sample_reply()),
            last_payload: Mutex::new(None),
        }
    }

    /// Backend down: every operation fails at the connection level.
    pub fn unreachable() -> Self {
        let err = BackendError::Unreachable("connection refused".to_string());
        Self {
            version_result: Err(err.clone()),
            list_result: Err(err.clone()),
            show_result: Err(err.clone()),
            generate_result: Err(err),
            last_payload: Mutex::new(None),
        }
    }

    pub fn with_generate_error(mut self, err: BackendError) -> Self {
        self.generate_result = Err(err);
        self
    }

    pub fn with_show_error(mut self, err: BackendError) -> Self {
        self.show_result = Err(err);
        self
    }

    pub fn with_show_detail(mut self, detail: ModelDetail) -> Self {
        self.show_result = Ok(detail);
        self
    }
}

#[async_trait]
impl OllamaPort for FakeOllama {
    async fn version(&self) -> Result<(), BackendError> {
        self.version_result.clone()
    }

    async fn list_models(&self) -> Result<Vec<ModelSummary>, BackendError> {
        self.list_result.clone()
    }

    async fn show_model(&self, _name: &str) -> Result<ModelDetail, BackendError> {
        self.show_result.clone()
    }

    async fn generate(
        &self,
        payload: &GeneratePayload,
        _timeout: Duration,
    ) -> Result<GenerateReply, BackendError> {
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        self.generate_result.clone()
    }
}

pub fn sample_reply() -> GenerateReply {
    GenerateReply {
        response: "hello".to_string(),
        model: "gemma2:2b".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        done: true,
        total_duration: None,
        load_duration: None,
        prompt_eval_count: None,
        prompt_eval_duration: None,
        eval_count: None,
        eval_duration: None,
    }
}

pub fn sample_detail(name: &str) -> ModelDetail {
    let mut details = serde_json::Map::new();
    details.insert(
        "family".to_string(),
        serde_json::Value::String("gemma2".to_string()),
    );
    ModelDetail {
        name: name.to_string(),
        size: 1_629_518_495,
        digest: "8ccf136fdd52".to_string(),
        details,
    }
}
