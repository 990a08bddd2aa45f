//! Credential repositories: user credentials, per-user defaults, and
//! system-wide fallback credentials.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockCredentialStore;
pub use trait_::{DefaultProviderRepository, SystemCredentialRepository, UserCredentialRepository};
