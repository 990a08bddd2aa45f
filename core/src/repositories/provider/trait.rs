//! Provider repository trait defining the interface for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::provider::Provider;
use crate::errors::DomainError;

/// Repository trait for the SMS provider catalog
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait ProviderRepository: Send + Sync {
    /// Create a new provider
    ///
    /// # Returns
    /// * `Ok(Provider)` - The created provider
    /// * `Err(DomainError::Validation)` - A provider with the same name exists
    async fn create(&self, provider: Provider) -> Result<Provider, DomainError>;

    /// Find a provider by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, DomainError>;

    /// Find a provider by name (exact match)
    async fn find_by_name(&self, name: &str) -> Result<Option<Provider>, DomainError>;

    /// List all providers in the catalog
    async fn list(&self) -> Result<Vec<Provider>, DomainError>;

    /// Update an existing provider
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No provider with the given id
    async fn update(&self, provider: Provider) -> Result<Provider, DomainError>;

    /// Delete a provider from the catalog
    ///
    /// # Returns
    /// * `Ok(true)` - Provider was deleted
    /// * `Ok(false)` - Provider not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
