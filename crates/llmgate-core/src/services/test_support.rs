//! Hand-written fake backend for service unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{
    BackendError, GeneratePayload, GenerateReply, ModelDetail, ModelSummary, OllamaPort,
};

/// A canned-response `OllamaPort` with call accounting.
pub(crate) struct FakeOllama {
    version_result: Result<(), BackendError>,
    list_result: Result<Vec<ModelSummary>, BackendError>,
    show_result: Result<ModelDetail, BackendError>,
    generate_result: Result<GenerateReply, BackendError>,
    pub(crate) version_calls: AtomicU32,
    pub(crate) generate_calls: AtomicU32,
    pub(crate) last_payload: Mutex<Option<GeneratePayload>>,
}

impl FakeOllama {
    /// A backend that answers the version check and lists `names`.
    pub(crate) fn reachable_with(names: &[&str]) -> Self {
        Self {
            version_result: Ok(()),
            list_result: Ok(names
                .iter()
                .map(|n| ModelSummary {
                    name: (*n).to_string(),
                })
                .collect()),
            show_result: Ok(sample_detail()),
            generate_result: Ok(sample_reply()),
            version_calls: AtomicU32::new(0),
            generate_calls: AtomicU32::new(0),
            last_payload: Mutex::new(None),
        }
    }

    /// A backend that refuses every connection.
    pub(crate) fn unreachable() -> Self {
        let refused = BackendError::Unreachable("connection refused".to_string());
        Self {
            version_result: Err(refused.clone()),
            list_result: Err(refused.clone()),
            show_result: Err(refused.clone()),
            generate_result: Err(refused),
            version_calls: AtomicU32::new(0),
            generate_calls: AtomicU32::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub(crate) fn with_version_error(mut self, err: BackendError) -> Self {
        self.version_result = Err(err);
        self
    }

    pub(crate) fn with_list_error(mut self, err: BackendError) -> Self {
        self.list_result = Err(err);
        self
    }

    pub(crate) fn with_show_error(mut self, err: BackendError) -> Self {
        self.show_result = Err(err);
        self
    }

    pub(crate) fn with_generate_error(mut self, err: BackendError) -> Self {
        self.generate_result = Err(err);
        self
    }

    pub(crate) fn with_reply(mut self, reply: GenerateReply) -> Self {
        self.generate_result = Ok(reply);
        self
    }
}

fn sample_reply() -> GenerateReply {
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

fn sample_detail() -> ModelDetail {
    ModelDetail {
        name: "gemma2:2b".to_string(),
        size: 1_629_518_495,
        digest: "sha256:abcd".to_string(),
        details: serde_json::Map::new(),
    }
}

#[async_trait]
impl OllamaPort for FakeOllama {
    async fn version(&self) -> Result<(), BackendError> {
        self.version_calls.fetch_add(1, Ordering::SeqCst);
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
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        self.generate_result.clone()
    }
}
