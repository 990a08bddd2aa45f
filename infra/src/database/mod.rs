//! Database module - MySQL implementations using SQLx

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{
    MySqlCampaignRepository, MySqlContactRepository, MySqlDefaultProviderRepository,
    MySqlMessageRepository, MySqlProviderRepository, MySqlSystemCredentialRepository,
    MySqlUserCredentialRepository,
};
