//! In-memory credential store for testing.
//!
//! One struct implements all three credential traits so tests can wire a
//! single store into the selector. Provider names for the joined
//! projections come from a small registry seeded by the test.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::credential::{
    SystemCredential, UserCredential, UserDefaultProvider,
};
use crate::domain::value_objects::{CredentialOwner, ResolvedCredential};
use crate::errors::DomainError;

use super::trait_::{
    DefaultProviderRepository, SystemCredentialRepository, UserCredentialRepository,
};

/// In-memory credential store implementing all three credential traits
pub struct MockCredentialStore {
    provider_names: Arc<RwLock<HashMap<Uuid, String>>>,
    user_credentials: Arc<RwLock<HashMap<Uuid, UserCredential>>>,
    defaults: Arc<RwLock<HashMap<Uuid, UserDefaultProvider>>>,
    system_credentials: Arc<RwLock<HashMap<Uuid, SystemCredential>>>,
}

impl MockCredentialStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            provider_names: Arc::new(RwLock::new(HashMap::new())),
            user_credentials: Arc::new(RwLock::new(HashMap::new())),
            defaults: Arc::new(RwLock::new(HashMap::new())),
            system_credentials: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a provider name used by the joined projections
    pub async fn register_provider(&self, provider_id: Uuid, name: impl Into<String>) {
        self.provider_names
            .write()
            .await
            .insert(provider_id, name.into());
    }

    fn resolve_user(
        names: &HashMap<Uuid, String>,
        credential: &UserCredential,
    ) -> ResolvedCredential {
        ResolvedCredential {
            credential_id: credential.id,
            provider_id: credential.provider_id,
            provider_name: names
                .get(&credential.provider_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            api_key: credential.api_key.clone(),
            sender_id: credential.sender_id.clone(),
            owner: CredentialOwner::User(credential.user_id),
        }
    }

    fn resolve_system(
        names: &HashMap<Uuid, String>,
        credential: &SystemCredential,
    ) -> ResolvedCredential {
        ResolvedCredential {
            credential_id: credential.id,
            provider_id: credential.provider_id,
            provider_name: names
                .get(&credential.provider_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            api_key: credential.api_key.clone(),
            sender_id: credential.sender_id.clone(),
            owner: CredentialOwner::System,
        }
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserCredentialRepository for MockCredentialStore {
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let mut credentials = self.user_credentials.write().await;

        if credentials
            .values()
            .any(|c| c.user_id == credential.user_id && c.provider_id == credential.provider_id)
        {
            return Err(DomainError::Validation {
                message: "Credential already exists for this provider".to_string(),
            });
        }

        credentials.insert(credential.id, credential.clone());
        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserCredential>, DomainError> {
        let credentials = self.user_credentials.read().await;
        Ok(credentials.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<UserCredential>, DomainError> {
        let credentials = self.user_credentials.read().await;
        Ok(credentials
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_with_provider(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ResolvedCredential>, DomainError> {
        let names = self.provider_names.read().await;
        let credentials = self.user_credentials.read().await;

        let mut resolved: Vec<ResolvedCredential> = credentials
            .values()
            .filter(|c| c.user_id == user_id)
            .map(|c| Self::resolve_user(&names, c))
            .collect();
        // Stable order so deterministic rng picks are meaningful in tests
        resolved.sort_by(|a, b| a.provider_name.cmp(&b.provider_name));
        Ok(resolved)
    }

    async fn find_for_provider(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<ResolvedCredential>, DomainError> {
        let names = self.provider_names.read().await;
        let credentials = self.user_credentials.read().await;
        Ok(credentials
            .values()
            .find(|c| c.user_id == user_id && c.provider_id == provider_id)
            .map(|c| Self::resolve_user(&names, c)))
    }

    async fn update(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let mut credentials = self.user_credentials.write().await;

        if !credentials.contains_key(&credential.id) {
            return Err(DomainError::NotFound {
                resource: "UserCredential".to_string(),
            });
        }

        credentials.insert(credential.id, credential.clone());
        Ok(credential)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut credentials = self.user_credentials.write().await;
        Ok(credentials.remove(&id).is_some())
    }

    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError> {
        let credentials = self.user_credentials.read().await;
        Ok(credentials.values().any(|c| c.provider_id == provider_id))
    }
}

#[async_trait]
impl DefaultProviderRepository for MockCredentialStore {
    async fn set(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<UserDefaultProvider, DomainError> {
        // Replace under a single write lock, mirroring the transactional
        // delete-then-insert of the SQL implementation.
        let mut defaults = self.defaults.write().await;
        let default = UserDefaultProvider::new(user_id, provider_id);
        defaults.insert(user_id, default.clone());
        Ok(default)
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<UserDefaultProvider>, DomainError> {
        let defaults = self.defaults.read().await;
        Ok(defaults.get(&user_id).cloned())
    }

    async fn remove(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let mut defaults = self.defaults.write().await;
        Ok(defaults.remove(&user_id).is_some())
    }
}

#[async_trait]
impl SystemCredentialRepository for MockCredentialStore {
    async fn create(
        &self,
        credential: SystemCredential,
    ) -> Result<SystemCredential, DomainError> {
        let mut credentials = self.system_credentials.write().await;

        if credentials
            .values()
            .any(|c| c.provider_id == credential.provider_id)
        {
            return Err(DomainError::Validation {
                message: "System credential already exists for this provider".to_string(),
            });
        }

        credentials.insert(credential.id, credential.clone());
        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemCredential>, DomainError> {
        let credentials = self.system_credentials.read().await;
        Ok(credentials.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<SystemCredential>, DomainError> {
        let credentials = self.system_credentials.read().await;
        Ok(credentials.values().cloned().collect())
    }

    async fn list_with_provider(&self) -> Result<Vec<ResolvedCredential>, DomainError> {
        let names = self.provider_names.read().await;
        let credentials = self.system_credentials.read().await;

        let mut resolved: Vec<ResolvedCredential> = credentials
            .values()
            .map(|c| Self::resolve_system(&names, c))
            .collect();
        resolved.sort_by(|a, b| a.provider_name.cmp(&b.provider_name));
        Ok(resolved)
    }

    async fn update(
        &self,
        credential: SystemCredential,
    ) -> Result<SystemCredential, DomainError> {
        let mut credentials = self.system_credentials.write().await;

        if !credentials.contains_key(&credential.id) {
            return Err(DomainError::NotFound {
                resource: "SystemCredential".to_string(),
            });
        }

        credentials.insert(credential.id, credential.clone());
        Ok(credential)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut credentials = self.system_credentials.write().await;
        Ok(credentials.remove(&id).is_some())
    }

    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError> {
        let credentials = self.system_credentials.read().await;
        Ok(credentials.values().any(|c| c.provider_id == provider_id))
    }
}
