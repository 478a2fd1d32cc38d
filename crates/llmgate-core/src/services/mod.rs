//! Orchestration services built on top of the `OllamaPort` contract.
//!
//! Each service is constructed once at the composition root from the
//! gateway configuration and an `Arc<dyn OllamaPort>`, and holds no
//! mutable state; concurrent use requires no locking.

mod catalog;
mod error;
mod inference;
mod readiness;
mod warmup;

pub use catalog::ModelCatalog;
pub use error::GatewayError;
pub use inference::InferenceGateway;
pub use readiness::ReadinessProbe;
pub use warmup::{PollOutcome, WarmupController, WarmupOutcome};

#[cfg(test)]
pub(crate) mod test_support;
