//! Provider catalog administration

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::provider::Provider;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    ProviderRepository, SystemCredentialRepository, UserCredentialRepository,
};

/// CRUD over the SMS provider catalog.
///
/// Deleting a provider that still has user or system credentials
/// referencing it is rejected; cascades are never silent.
pub struct ProviderService<P, U, S>
where
    P: ProviderRepository,
    U: UserCredentialRepository,
    S: SystemCredentialRepository,
{
    providers: Arc<P>,
    user_credentials: Arc<U>,
    system_credentials: Arc<S>,
}

impl<P, U, S> ProviderService<P, U, S>
where
    P: ProviderRepository,
    U: UserCredentialRepository,
    S: SystemCredentialRepository,
{
    pub fn new(providers: Arc<P>, user_credentials: Arc<U>, system_credentials: Arc<S>) -> Self {
        Self {
            providers,
            user_credentials,
            system_credentials,
        }
    }

    /// Add a provider to the catalog.
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Empty name, or the name is taken
    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> DomainResult<Provider> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Provider name must not be empty".to_string(),
            });
        }

        let provider = self.providers.create(Provider::new(name, description)).await?;
        info!(provider_id = %provider.id, name = %provider.name, "Provider created");
        Ok(provider)
    }

    pub async fn list(&self) -> DomainResult<Vec<Provider>> {
        self.providers.list().await
    }

    /// Fetch one provider.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No provider with the given id
    pub async fn get(&self, id: Uuid) -> DomainResult<Provider> {
        self.providers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Provider {id}"),
            })
    }

    /// Rename a provider or change its description.
    ///
    /// `None` fields are left untouched; `description` uses a double
    /// option so callers can clear it with `Some(None)`.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<Option<String>>,
    ) -> DomainResult<Provider> {
        let mut provider = self.get(id).await?;

        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation {
                    message: "Provider name must not be empty".to_string(),
                });
            }
            provider.rename(name);
        }
        if let Some(description) = description {
            provider.set_description(description);
        }

        self.providers.update(provider).await
    }

    /// Remove a provider from the catalog.
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Credentials still reference it
    /// * `Err(DomainError::NotFound)` - No provider with the given id
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let in_use = self.user_credentials.exists_for_provider(id).await?
            || self.system_credentials.exists_for_provider(id).await?;
        if in_use {
            return Err(DomainError::Validation {
                message: "Provider still has credentials configured".to_string(),
            });
        }

        if !self.providers.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("Provider {id}"),
            });
        }
        info!(provider_id = %id, "Provider deleted");
        Ok(())
    }
}
