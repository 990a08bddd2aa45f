//! Mock implementation of ProviderRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::provider::Provider;
use crate::errors::DomainError;

use super::trait_::ProviderRepository;

/// In-memory provider repository for testing
pub struct MockProviderRepository {
    providers: Arc<RwLock<HashMap<Uuid, Provider>>>,
}

impl MockProviderRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-seeded with providers
    pub fn with_providers(providers: impl IntoIterator<Item = Provider>) -> Self {
        let map = providers.into_iter().map(|p| (p.id, p)).collect();
        Self {
            providers: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for MockProviderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderRepository for MockProviderRepository {
    async fn create(&self, provider: Provider) -> Result<Provider, DomainError> {
        let mut providers = self.providers.write().await;

        if providers.values().any(|p| p.name == provider.name) {
            return Err(DomainError::Validation {
                message: format!("Provider '{}' already exists", provider.name),
            });
        }

        providers.insert(provider.id, provider.clone());
        Ok(provider)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, DomainError> {
        let providers = self.providers.read().await;
        Ok(providers.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Provider>, DomainError> {
        let providers = self.providers.read().await;
        Ok(providers.values().find(|p| p.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Provider>, DomainError> {
        let providers = self.providers.read().await;
        Ok(providers.values().cloned().collect())
    }

    async fn update(&self, provider: Provider) -> Result<Provider, DomainError> {
        let mut providers = self.providers.write().await;

        if !providers.contains_key(&provider.id) {
            return Err(DomainError::NotFound {
                resource: "Provider".to_string(),
            });
        }

        providers.insert(provider.id, provider.clone());
        Ok(provider)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut providers = self.providers.write().await;
        Ok(providers.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let repo = MockProviderRepository::new();
        repo.create(Provider::new("MNotify", None)).await.unwrap();

        let result = repo.create(Provider::new("MNotify", None)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_provider() {
        let repo = MockProviderRepository::new();
        let result = repo.update(Provider::new("Ghost", None)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
