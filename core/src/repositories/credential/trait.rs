//! Credential repository traits.
//!
//! Three small contracts cover the credential store: a user's per-provider
//! credentials, the user's default-provider pointer, and the system-wide
//! fallback credentials. The selector consumes the joined
//! [`ResolvedCredential`] projections so it never has to look up provider
//! names itself.
//!
//! [`ResolvedCredential`]: crate::domain::value_objects::ResolvedCredential

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::credential::{SystemCredential, UserCredential, UserDefaultProvider};
use crate::domain::value_objects::ResolvedCredential;
use crate::errors::DomainError;

/// Repository trait for per-user provider credentials
#[async_trait]
pub trait UserCredentialRepository: Send + Sync {
    /// Create a new credential
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - The (user_id, provider_id) pair
    ///   already has a credential
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError>;

    /// Find a credential by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserCredential>, DomainError>;

    /// List all credentials owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<UserCredential>, DomainError>;

    /// List a user's credentials joined with their provider names
    async fn find_by_user_with_provider(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ResolvedCredential>, DomainError>;

    /// Find the user's credential for one provider, joined with the
    /// provider name (used by the default-provider resolution step)
    async fn find_for_provider(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<ResolvedCredential>, DomainError>;

    /// Update an existing credential
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No credential with the given id
    async fn update(&self, credential: UserCredential) -> Result<UserCredential, DomainError>;

    /// Delete a credential
    ///
    /// # Returns
    /// * `Ok(true)` - Credential was deleted
    /// * `Ok(false)` - Credential not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Whether any user credential references the given provider
    /// (guards provider deletion)
    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError>;
}

/// Repository trait for the per-user default-provider pointer
#[async_trait]
pub trait DefaultProviderRepository: Send + Sync {
    /// Set the user's default provider, atomically replacing any prior
    /// default. Never leaves more than one row per user at rest.
    async fn set(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<UserDefaultProvider, DomainError>;

    /// Get the user's current default, if any
    async fn get(&self, user_id: Uuid) -> Result<Option<UserDefaultProvider>, DomainError>;

    /// Remove the user's default
    ///
    /// # Returns
    /// * `Ok(true)` - A default existed and was removed
    /// * `Ok(false)` - No default was set
    async fn remove(&self, user_id: Uuid) -> Result<bool, DomainError>;
}

/// Repository trait for system-wide fallback credentials
#[async_trait]
pub trait SystemCredentialRepository: Send + Sync {
    /// Create a new system credential
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - The provider already has a
    ///   system credential
    async fn create(&self, credential: SystemCredential)
        -> Result<SystemCredential, DomainError>;

    /// Find a system credential by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemCredential>, DomainError>;

    /// List all system credentials
    async fn list(&self) -> Result<Vec<SystemCredential>, DomainError>;

    /// List all system credentials joined with their provider names
    async fn list_with_provider(&self) -> Result<Vec<ResolvedCredential>, DomainError>;

    /// Update an existing system credential
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No credential with the given id
    async fn update(&self, credential: SystemCredential)
        -> Result<SystemCredential, DomainError>;

    /// Delete a system credential
    ///
    /// # Returns
    /// * `Ok(true)` - Credential was deleted
    /// * `Ok(false)` - Credential not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Whether a system credential references the given provider
    /// (guards provider deletion)
    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError>;
}
