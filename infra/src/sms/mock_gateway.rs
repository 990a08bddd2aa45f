//! Mock SMS gateway for development and testing.
//!
//! Accepts every send without any network call and echoes a canned
//! response, so the full pipeline can run against a database without
//! spending SMS credits.

use async_trait::async_trait;
use tracing::info;

use tr_core::domain::value_objects::SendOutcome;
use tr_core::services::SmsGateway;
use tr_shared::utils::phone::mask_phone_number;

/// Gateway that accepts everything without calling out
pub struct MockGateway {
    provider_name: String,
}

impl MockGateway {
    /// Create a mock gateway answering for the given provider name
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
        }
    }
}

#[async_trait]
impl SmsGateway for MockGateway {
    fn provider_name(&self) -> &str {
        &self.provider_name
    }

    async fn send(
        &self,
        _api_key: &str,
        sender_id: &str,
        message: &str,
        recipients: &[String],
    ) -> SendOutcome {
        info!(
            provider = %self.provider_name,
            sender_id = %sender_id,
            first_recipient = %recipients.first().map(|r| mask_phone_number(r)).unwrap_or_default(),
            recipients = recipients.len(),
            length = message.len(),
            "Mock gateway accepted send"
        );
        SendOutcome::success(format!(
            "MOCK|accepted {} recipient(s)",
            recipients.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_always_succeeds() {
        let gateway = MockGateway::new("MNotify");
        let outcome = gateway
            .send("key", "SENDER", "Hi", &["+233501234567".to_string()])
            .await;

        assert!(outcome.is_success());
        assert!(outcome.raw_response.contains("1 recipient"));
    }
}
