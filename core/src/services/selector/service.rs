//! Provider selector implementation

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::value_objects::{Selection, SelectionKind};
use crate::errors::{DispatchError, DomainResult};
use crate::repositories::{
    DefaultProviderRepository, SystemCredentialRepository, UserCredentialRepository,
};

use super::rng::{SelectionRng, UniformRng};

/// Resolves the credential a send goes out with.
///
/// Resolution order, stopping at the first hit:
/// 1. The user's default provider, if it has a matching credential.
/// 2. A uniformly random pick among the user's own credentials.
/// 3. A uniformly random pick among the system fallback credentials.
///
/// A default pointing at a provider the user no longer has a credential
/// for is treated as dangling and falls through to step 2.
pub struct ProviderSelector<U, D, S, R = UniformRng>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    R: SelectionRng,
{
    user_credentials: Arc<U>,
    defaults: Arc<D>,
    system_credentials: Arc<S>,
    rng: R,
}

impl<U, D, S> ProviderSelector<U, D, S, UniformRng>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
{
    /// Create a selector with uniform randomness
    pub fn new(user_credentials: Arc<U>, defaults: Arc<D>, system_credentials: Arc<S>) -> Self {
        Self::with_rng(user_credentials, defaults, system_credentials, UniformRng)
    }
}

impl<U, D, S, R> ProviderSelector<U, D, S, R>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    R: SelectionRng,
{
    /// Create a selector with an explicit randomness source
    pub fn with_rng(
        user_credentials: Arc<U>,
        defaults: Arc<D>,
        system_credentials: Arc<S>,
        rng: R,
    ) -> Self {
        Self {
            user_credentials,
            defaults,
            system_credentials,
            rng,
        }
    }

    /// Pick the credential for one send attempt.
    ///
    /// # Returns
    /// * `Err(DispatchError::NoProviderAvailable)` - No credential exists
    ///   anywhere in the resolution chain
    pub async fn choose(&self, user_id: Uuid) -> DomainResult<Selection> {
        if let Some(default) = self.defaults.get(user_id).await? {
            if let Some(credential) = self
                .user_credentials
                .find_for_provider(user_id, default.provider_id)
                .await?
            {
                debug!(
                    user_id = %user_id,
                    provider = %credential.provider_name,
                    "Resolved user default provider"
                );
                return Ok(Selection {
                    kind: SelectionKind::UserDefault,
                    credential,
                });
            }

            warn!(
                user_id = %user_id,
                provider_id = %default.provider_id,
                "Default provider has no matching credential, falling through"
            );
        }

        let own = self
            .user_credentials
            .find_by_user_with_provider(user_id)
            .await?;
        if !own.is_empty() {
            let credential = own[self.rng.pick_index(own.len())].clone();
            debug!(
                user_id = %user_id,
                provider = %credential.provider_name,
                candidates = own.len(),
                "Picked random user credential"
            );
            return Ok(Selection {
                kind: SelectionKind::UserRandom,
                credential,
            });
        }

        let system = self.system_credentials.list_with_provider().await?;
        if !system.is_empty() {
            let credential = system[self.rng.pick_index(system.len())].clone();
            debug!(
                user_id = %user_id,
                provider = %credential.provider_name,
                "Fell back to system credential"
            );
            return Ok(Selection {
                kind: SelectionKind::SystemDefault,
                credential,
            });
        }

        warn!(user_id = %user_id, "No credential available anywhere in the resolution chain");
        Err(DispatchError::NoProviderAvailable.into())
    }
}
