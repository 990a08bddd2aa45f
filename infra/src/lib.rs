//! # Infrastructure Layer
//!
//! Concrete implementations behind the core crate's ports: MySQL
//! repositories over SQLx and the outbound SMS gateways.

pub mod database;
pub mod sms;

use tr_shared::config::AppConfig;

/// Load application configuration from the environment (and `.env` if
/// present)
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS gateway error
    #[error("SMS gateway error: {0}")]
    Sms(String),
}
