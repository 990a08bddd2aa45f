//! Shared utilities and common types for the TextRelay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (recipient validation, phone masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, SmsConfig};
pub use types::response::ErrorResponse;
pub use utils::phone;
