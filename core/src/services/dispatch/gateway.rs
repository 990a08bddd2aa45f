//! Gateway contract and registry.
//!
//! Each SMS provider is an adapter behind [`SmsGateway`]. Gateways never
//! return `Err`: transport failures, non-2xx responses and provider
//! rejections are all normalized into a failure [`SendOutcome`] carrying
//! the raw diagnostic, so the pipeline can persist it verbatim.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::value_objects::SendOutcome;

/// Provider-specific send adapter
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Provider name this gateway serves, as it appears in the catalog
    fn provider_name(&self) -> &str;

    /// Perform one outbound call for the full recipient list.
    ///
    /// The raw response body (or the best available diagnostic on
    /// failure) is captured in the outcome, never discarded.
    async fn send(
        &self,
        api_key: &str,
        sender_id: &str,
        message: &str,
        recipients: &[String],
    ) -> SendOutcome;
}

/// Startup-registered map from provider name to gateway.
///
/// Lookup is case-insensitive; unknown provider names fail closed (the
/// executor turns a miss into `UnsupportedProvider`).
#[derive(Default)]
pub struct GatewayRegistry {
    gateways: HashMap<String, Arc<dyn SmsGateway>>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gateway under its provider name.
    ///
    /// Re-registering a name replaces the previous gateway.
    pub fn register(&mut self, gateway: Arc<dyn SmsGateway>) {
        let key = gateway.provider_name().to_lowercase();
        self.gateways.insert(key, gateway);
    }

    /// Look up the gateway for a provider name (case-insensitive)
    pub fn get(&self, provider_name: &str) -> Option<Arc<dyn SmsGateway>> {
        self.gateways.get(&provider_name.to_lowercase()).cloned()
    }

    /// Registered provider names, for startup logging
    pub fn provider_names(&self) -> Vec<&str> {
        self.gateways.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}
