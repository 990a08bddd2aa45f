//! SMS gateway configuration module
//!
//! Per-send API keys come from the credential store, not from here; this
//! config only carries gateway-level settings shared by all tenants.

use serde::{Deserialize, Serialize};

/// Default sender label applied when neither the caller nor the credential
/// provides one. Sender IDs are capped at 11 alphanumeric characters by
/// most gateways.
pub const DEFAULT_SENDER_ID: &str = "TEXTRELAY";

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Fallback sender label when no override or credential sender is set
    pub default_sender_id: String,

    /// Timeout for outbound gateway requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            default_sender_id: DEFAULT_SENDER_ID.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            default_sender_id: std::env::var("SMS_DEFAULT_SENDER_ID")
                .unwrap_or_else(|_| DEFAULT_SENDER_ID.to_string()),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
