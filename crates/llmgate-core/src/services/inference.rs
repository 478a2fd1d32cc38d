//! The inference gateway: a one-shot relay from validated requests to
//! the backend generate endpoint.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::GatewayConfig;
use crate::ports::{GenerateOptions, GeneratePayload, OllamaPort};
use crate::services::GatewayError;
use crate::types::{InferenceOutcome, InferenceRequest};

/// Relays one inference request to the backend. No retries by design;
/// retry policy belongs to the caller, not the gateway.
#[derive(Clone)]
pub struct InferenceGateway {
    backend: Arc<dyn OllamaPort>,
    model_name: String,
    generate_timeout: Duration,
}

impl InferenceGateway {
    pub fn new(backend: Arc<dyn OllamaPort>, config: &GatewayConfig) -> Self {
        Self {
            backend,
            model_name: config.model_name.clone(),
            generate_timeout: config.timeouts.generate,
        }
    }

    /// Run one inference round-trip.
    ///
    /// The request is assumed validated (non-empty prompt, bounded
    /// sampling parameters). A reachability gate runs first so a dead
    /// backend yields `Unavailable` instead of a slow generate failure.
    pub async fn infer(&self, request: InferenceRequest) -> Result<InferenceOutcome, GatewayError> {
        if let Err(e) = self.backend.version().await {
            debug!("reachability gate failed: {e}");
            return Err(GatewayError::Unavailable);
        }

        let payload = GeneratePayload {
            model: self.model_name.clone(),
            prompt: request.prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: request.max_tokens,
                temperature: Some(request.temperature),
                top_p: Some(request.top_p),
            },
        };

        let reply = self
            .backend
            .generate(&payload, self.generate_timeout)
            .await?;

        Ok(InferenceOutcome {
            text: reply.response,
            model_name: reply.model,
            created_at: reply.created_at,
            done: reply.done,
            total_duration_ns: reply.total_duration,
            load_duration_ns: reply.load_duration,
            prompt_eval_count: reply.prompt_eval_count,
            prompt_eval_duration_ns: reply.prompt_eval_duration,
            eval_count: reply.eval_count,
            eval_duration_ns: reply.eval_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{BackendError, GenerateReply};
    use crate::services::test_support::FakeOllama;

    fn request(prompt: &str) -> InferenceRequest {
        InferenceRequest {
            prompt: prompt.to_string(),
            max_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
        }
    }

    fn gateway(backend: Arc<FakeOllama>) -> InferenceGateway {
        let config = GatewayConfig::new("http://localhost:11434", "gemma2:2b");
        InferenceGateway::new(backend, &config)
    }

    #[tokio::test]
    async fn response_text_passes_through_unmodified() {
        let backend = Arc::new(FakeOllama::reachable_with(&["gemma2:2b"]).with_reply(
            GenerateReply {
                response: "  verbatim text, with punctuation!  ".to_string(),
                model: "gemma2:2b".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                done: true,
                total_duration: Some(123),
                load_duration: None,
                prompt_eval_count: Some(4),
                prompt_eval_duration: None,
                eval_count: Some(9),
                eval_duration: None,
            },
        ));

        let outcome = gateway(backend.clone())
            .infer(request("hi"))
            .await
            .unwrap();

        assert_eq!(outcome.text, "  verbatim text, with punctuation!  ");
        assert_eq!(outcome.total_duration_ns, Some(123));
        assert_eq!(outcome.load_duration_ns, None);
        assert_eq!(outcome.eval_count, Some(9));

        // Payload carries the configured model and verbatim prompt.
        let payload = backend.last_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.model, "gemma2:2b");
        assert_eq!(payload.prompt, "hi");
        assert!(!payload.stream);
        assert_eq!(payload.options.num_predict, 512);
    }

    #[tokio::test]
    async fn unreachable_backend_yields_unavailable() {
        let backend = Arc::new(FakeOllama::unreachable());
        let err = gateway(backend).infer(request("hi")).await.unwrap_err();
        assert_eq!(err, GatewayError::Unavailable);
    }

    #[tokio::test]
    async fn version_timeout_also_gates_as_unavailable() {
        let backend = Arc::new(
            FakeOllama::reachable_with(&["gemma2:2b"]).with_version_error(BackendError::Timeout),
        );
        let err = gateway(backend).infer(request("hi")).await.unwrap_err();
        assert_eq!(err, GatewayError::Unavailable);
    }

    #[tokio::test]
    async fn generate_timeout_maps_to_gateway_timeout() {
        let backend = Arc::new(
            FakeOllama::reachable_with(&["gemma2:2b"]).with_generate_error(BackendError::Timeout),
        );
        let err = gateway(backend).infer(request("hi")).await.unwrap_err();
        assert_eq!(err, GatewayError::Timeout);
    }

    #[tokio::test]
    async fn upstream_status_passes_through() {
        let backend = Arc::new(FakeOllama::reachable_with(&["gemma2:2b"]).with_generate_error(
            BackendError::Http {
                status: 422,
                body: "bad options".to_string(),
            },
        ));
        let err = gateway(backend).infer(request("hi")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Upstream { status: 422, .. }));
    }
}
