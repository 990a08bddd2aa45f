//! Send executor implementation

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::value_objects::{ResolvedCredential, SendOutcome};
use crate::errors::{DispatchError, DomainResult};
use tr_shared::config::sms::DEFAULT_SENDER_ID;

use super::gateway::GatewayRegistry;

/// Dispatches one send through the gateway matching the credential's
/// provider name.
///
/// Sender identity precedence: explicit per-call override, then the
/// credential's configured sender id, then the fallback label.
pub struct SendExecutor {
    gateways: Arc<GatewayRegistry>,
    fallback_sender: String,
}

impl SendExecutor {
    /// Create an executor with the stock fallback sender label
    pub fn new(gateways: Arc<GatewayRegistry>) -> Self {
        Self::with_fallback_sender(gateways, DEFAULT_SENDER_ID)
    }

    /// Create an executor with a custom fallback sender label
    pub fn with_fallback_sender(
        gateways: Arc<GatewayRegistry>,
        fallback_sender: impl Into<String>,
    ) -> Self {
        Self {
            gateways,
            fallback_sender: fallback_sender.into(),
        }
    }

    /// Perform one outbound send.
    ///
    /// # Returns
    /// * `Ok(SendOutcome)` - The gateway was called; success or failure is
    ///   in the outcome, with the raw response captured either way
    /// * `Err(DispatchError::UnsupportedProvider)` - No gateway is
    ///   registered for the credential's provider name
    pub async fn execute(
        &self,
        credential: &ResolvedCredential,
        sender_override: Option<&str>,
        message: &str,
        recipients: &[String],
    ) -> DomainResult<SendOutcome> {
        let gateway = self
            .gateways
            .get(&credential.provider_name)
            .ok_or_else(|| {
                error!(
                    provider = %credential.provider_name,
                    "No gateway registered for provider"
                );
                DispatchError::UnsupportedProvider {
                    provider: credential.provider_name.clone(),
                }
            })?;

        let sender_id = self.resolve_sender(credential, sender_override);

        debug!(
            provider = %credential.provider_name,
            sender_id = %sender_id,
            recipients = recipients.len(),
            "Dispatching to gateway"
        );

        Ok(gateway
            .send(&credential.api_key, sender_id, message, recipients)
            .await)
    }

    /// Override > credential sender id > fallback label. Empty strings
    /// are treated as unset.
    fn resolve_sender<'a>(
        &'a self,
        credential: &'a ResolvedCredential,
        sender_override: Option<&'a str>,
    ) -> &'a str {
        sender_override
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                credential
                    .sender_id
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or(&self.fallback_sender)
    }
}
