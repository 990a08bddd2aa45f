//! Provider catalog repository.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockProviderRepository;
pub use trait_::ProviderRepository;
