//! Shared mocks for send pipeline tests

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::value_objects::SendOutcome;
use crate::services::dispatch::gateway::{GatewayRegistry, SmsGateway};
use crate::services::selector::SelectionRng;

/// Deterministic randomness returning a fixed index (clamped to bounds)
pub struct FixedRng(pub usize);

impl SelectionRng for FixedRng {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// One recorded gateway invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub api_key: String,
    pub sender_id: String,
    pub message: String,
    pub recipients: Vec<String>,
}

/// Gateway returning a canned outcome and recording every call
pub struct StubGateway {
    name: String,
    outcome: SendOutcome,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubGateway {
    pub fn succeeding(name: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: SendOutcome::success(raw_response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(name: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: SendOutcome::failure(raw_response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded calls, usable after the gateway moves into
    /// the registry
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl SmsGateway for StubGateway {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn send(
        &self,
        api_key: &str,
        sender_id: &str,
        message: &str,
        recipients: &[String],
    ) -> SendOutcome {
        self.calls.lock().await.push(RecordedCall {
            api_key: api_key.to_string(),
            sender_id: sender_id.to_string(),
            message: message.to_string(),
            recipients: recipients.to_vec(),
        });
        self.outcome.clone()
    }
}

/// Registry containing a single stub gateway, plus its call log
pub fn registry_with(gateway: StubGateway) -> (Arc<GatewayRegistry>, Arc<Mutex<Vec<RecordedCall>>>) {
    let calls = gateway.calls();
    let mut registry = GatewayRegistry::new();
    registry.register(Arc::new(gateway));
    (Arc::new(registry), calls)
}
