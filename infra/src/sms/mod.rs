//! SMS gateway implementations.
//!
//! Each provider gets an adapter implementing the core `SmsGateway`
//! contract; `build_gateway_registry` wires the live adapters into the
//! registry at startup. Adding a provider means adding an adapter and a
//! `register` call here.

mod mnotify;
mod mock_gateway;

pub use mnotify::{MNotifyConfig, MNotifyGateway};
pub use mock_gateway::MockGateway;

use std::sync::Arc;

use tracing::info;

use tr_core::services::GatewayRegistry;

use crate::InfrastructureError;

/// Build the gateway registry with all live provider adapters
pub fn build_gateway_registry() -> Result<GatewayRegistry, InfrastructureError> {
    let mut registry = GatewayRegistry::new();
    registry.register(Arc::new(MNotifyGateway::from_env()?));

    info!(providers = ?registry.provider_names(), "SMS gateway registry built");
    Ok(registry)
}

/// Build a registry backed by the mock gateway only, for development runs
pub fn build_mock_registry() -> GatewayRegistry {
    let mut registry = GatewayRegistry::new();
    registry.register(Arc::new(MockGateway::new("MNotify")));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_registry_contains_mnotify() {
        let registry = build_gateway_registry().unwrap();
        assert!(registry.get("mnotify").is_some());
    }

    #[test]
    fn test_mock_registry_answers_for_mnotify() {
        let registry = build_mock_registry();
        assert!(registry.get("MNotify").is_some());
    }
}
