//! Repository interfaces for data persistence.
//!
//! Each entity gets a trait defining its persistence contract and an
//! in-memory mock implementation used by service tests (and available to
//! development builds). Concrete SQL implementations live in the
//! infrastructure crate.

pub mod campaign;
pub mod contact;
pub mod credential;
pub mod message;
pub mod notification;
pub mod provider;

pub use campaign::{CampaignRepository, MockCampaignRepository};
pub use contact::{ContactRepository, MockContactRepository};
pub use credential::{
    DefaultProviderRepository, MockCredentialStore, SystemCredentialRepository,
    UserCredentialRepository,
};
pub use message::{MessageRepository, MockMessageRepository};
pub use notification::{MockNotificationRepository, NotificationRepository};
pub use provider::{MockProviderRepository, ProviderRepository};
