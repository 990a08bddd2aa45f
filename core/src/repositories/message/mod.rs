//! Single-send message repository.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockMessageRepository;
pub use trait_::MessageRepository;
