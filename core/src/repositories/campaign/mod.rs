//! Campaign and message-history repository.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockCampaignRepository;
pub use trait_::CampaignRepository;
