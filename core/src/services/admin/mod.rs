//! Provider and credential administration.
//!
//! CRUD over the provider catalog, per-user credentials and default
//! pointers, and the system fallback credentials the selector draws from.

mod credential_service;
mod provider_service;

#[cfg(test)]
mod tests;

pub use credential_service::CredentialService;
pub use provider_service::ProviderService;
