//! MySQL repository implementations

mod campaign_repository_impl;
mod contact_repository_impl;
mod credential_repository_impl;
mod message_repository_impl;
mod notification_repository_impl;
mod provider_repository_impl;

pub use campaign_repository_impl::MySqlCampaignRepository;
pub use contact_repository_impl::MySqlContactRepository;
pub use credential_repository_impl::{
    MySqlDefaultProviderRepository, MySqlSystemCredentialRepository,
    MySqlUserCredentialRepository,
};
pub use message_repository_impl::MySqlMessageRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use provider_repository_impl::MySqlProviderRepository;
