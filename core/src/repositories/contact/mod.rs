//! Contact lookup repository (read-only collaborator).

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockContactRepository;
pub use trait_::ContactRepository;
