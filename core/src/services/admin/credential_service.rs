//! Credential administration

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::credential::{
    SystemCredential, UserCredential, UserDefaultProvider,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    DefaultProviderRepository, ProviderRepository, SystemCredentialRepository,
    UserCredentialRepository,
};

/// CRUD over user credentials, the per-user default pointer, and the
/// system fallback credentials.
pub struct CredentialService<U, D, S, P>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    P: ProviderRepository,
{
    user_credentials: Arc<U>,
    defaults: Arc<D>,
    system_credentials: Arc<S>,
    providers: Arc<P>,
}

impl<U, D, S, P> CredentialService<U, D, S, P>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    P: ProviderRepository,
{
    pub fn new(
        user_credentials: Arc<U>,
        defaults: Arc<D>,
        system_credentials: Arc<S>,
        providers: Arc<P>,
    ) -> Self {
        Self {
            user_credentials,
            defaults,
            system_credentials,
            providers,
        }
    }

    async fn require_provider(&self, provider_id: Uuid) -> DomainResult<()> {
        if self.providers.find_by_id(provider_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("Provider {provider_id}"),
            });
        }
        Ok(())
    }

    fn require_api_key(api_key: &str) -> DomainResult<()> {
        if api_key.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "API key must not be empty".to_string(),
            });
        }
        Ok(())
    }

    // --- user credentials ---

    /// Store a user's API key for a provider.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - The provider does not exist
    /// * `Err(DomainError::Validation)` - Empty key, or the user already
    ///   has a credential for this provider
    pub async fn add_credential(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
        api_key: &str,
        sender_id: Option<String>,
    ) -> DomainResult<UserCredential> {
        self.require_provider(provider_id).await?;
        Self::require_api_key(api_key)?;

        let credential = self
            .user_credentials
            .create(UserCredential::new(user_id, provider_id, api_key, sender_id))
            .await?;
        info!(
            user_id = %user_id,
            provider_id = %provider_id,
            "User credential created"
        );
        Ok(credential)
    }

    pub async fn list_credentials(&self, user_id: Uuid) -> DomainResult<Vec<UserCredential>> {
        self.user_credentials.find_by_user(user_id).await
    }

    /// Rotate a credential's API key and/or change its sender id.
    pub async fn update_credential(
        &self,
        id: Uuid,
        api_key: Option<&str>,
        sender_id: Option<Option<String>>,
    ) -> DomainResult<UserCredential> {
        let mut credential = self
            .user_credentials
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Credential {id}"),
            })?;

        if let Some(api_key) = api_key {
            Self::require_api_key(api_key)?;
            credential.rotate_api_key(api_key);
        }
        if let Some(sender_id) = sender_id {
            credential.set_sender_id(sender_id);
        }

        self.user_credentials.update(credential).await
    }

    pub async fn remove_credential(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_credentials.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("Credential {id}"),
            });
        }
        Ok(())
    }

    // --- default provider pointer ---

    /// Point a user's default at a provider, replacing any prior default
    /// atomically. The user must hold a credential for that provider.
    pub async fn set_default(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> DomainResult<UserDefaultProvider> {
        self.require_provider(provider_id).await?;
        if self
            .user_credentials
            .find_for_provider(user_id, provider_id)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation {
                message: "No credential configured for this provider".to_string(),
            });
        }

        let default = self.defaults.set(user_id, provider_id).await?;
        info!(user_id = %user_id, provider_id = %provider_id, "Default provider set");
        Ok(default)
    }

    pub async fn get_default(&self, user_id: Uuid) -> DomainResult<Option<UserDefaultProvider>> {
        self.defaults.get(user_id).await
    }

    /// Remove the user's default, if one is set
    pub async fn clear_default(&self, user_id: Uuid) -> DomainResult<bool> {
        self.defaults.remove(user_id).await
    }

    // --- system credentials ---

    /// Store the system fallback credential for a provider.
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Empty key, or the provider
    ///   already has a system credential
    pub async fn add_system_credential(
        &self,
        provider_id: Uuid,
        api_key: &str,
        sender_id: Option<String>,
    ) -> DomainResult<SystemCredential> {
        self.require_provider(provider_id).await?;
        Self::require_api_key(api_key)?;

        let credential = self
            .system_credentials
            .create(SystemCredential::new(provider_id, api_key, sender_id))
            .await?;
        info!(provider_id = %provider_id, "System credential created");
        Ok(credential)
    }

    pub async fn list_system_credentials(&self) -> DomainResult<Vec<SystemCredential>> {
        self.system_credentials.list().await
    }

    pub async fn update_system_credential(
        &self,
        id: Uuid,
        api_key: &str,
    ) -> DomainResult<SystemCredential> {
        Self::require_api_key(api_key)?;

        let mut credential = self
            .system_credentials
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("SystemCredential {id}"),
            })?;
        credential.rotate_api_key(api_key);
        self.system_credentials.update(credential).await
    }

    pub async fn remove_system_credential(&self, id: Uuid) -> DomainResult<()> {
        if !self.system_credentials.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("SystemCredential {id}"),
            });
        }
        Ok(())
    }
}
