//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `database` - Database connection and pool configuration
//! - `sms` - SMS gateway defaults (sender label, request timeout)

pub mod database;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// SMS gateway configuration
    pub sms: SmsConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            sms: SmsConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            sms: SmsConfig::default(),
        }
    }
}
