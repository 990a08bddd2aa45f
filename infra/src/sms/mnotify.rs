//! MNotify SMS gateway.
//!
//! Bulk HTTP SMS gateway over the MNotify v1 API: one GET request carrying
//! the API key, sender id, message body and comma-joined recipient list.
//! The response body is plain text and is captured verbatim, success or
//! failure.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use tr_core::domain::value_objects::SendOutcome;
use tr_core::services::SmsGateway;
use tr_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

const DEFAULT_BASE_URL: &str = "https://apps.mnotify.net/smsapi";

/// MNotify gateway configuration
#[derive(Debug, Clone)]
pub struct MNotifyConfig {
    /// API endpoint
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl MNotifyConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("MNOTIFY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: std::env::var("MNOTIFY_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for MNotifyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// MNotify gateway implementation
pub struct MNotifyGateway {
    client: reqwest::Client,
    base_url: String,
}

impl MNotifyGateway {
    /// Create a new gateway with the given configuration
    pub fn new(config: MNotifyConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MNotifyConfig::from_env())
    }

    /// Pull the provider-supplied error field out of a JSON error body,
    /// when there is one. Error responses are usually plain text; JSON
    /// with a `message` or `error` field shows up on some rejections.
    fn extract_error(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

#[async_trait]
impl SmsGateway for MNotifyGateway {
    fn provider_name(&self) -> &str {
        "MNotify"
    }

    async fn send(
        &self,
        api_key: &str,
        sender_id: &str,
        message: &str,
        recipients: &[String],
    ) -> SendOutcome {
        let to = recipients.join(",");
        debug!(
            sender_id = %sender_id,
            first_recipient = %recipients.first().map(|r| mask_phone_number(r)).unwrap_or_default(),
            recipients = recipients.len(),
            "Calling MNotify"
        );

        let result = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", api_key),
                ("to", to.as_str()),
                ("msg", message),
                ("sender_id", sender_id),
            ])
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("Failed to read response body: {}", e));

                if status.is_success() {
                    SendOutcome::success(body)
                } else {
                    let diagnostic = Self::extract_error(&body)
                        .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), body));
                    warn!(status = status.as_u16(), "MNotify rejected send");
                    SendOutcome::failure(diagnostic)
                }
            }
            Err(e) if e.is_timeout() => {
                warn!("MNotify request timed out");
                SendOutcome::failure(format!("Request to MNotify timed out: {}", e))
            }
            Err(e) => {
                warn!(error = %e, "MNotify request failed");
                SendOutcome::failure(format!("Failed to reach MNotify: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_prefers_message_field() {
        let body = r#"{"status":"error","message":"Invalid API key"}"#;
        assert_eq!(
            MNotifyGateway::extract_error(body).as_deref(),
            Some("Invalid API key")
        );

        let body = r#"{"error":"quota exceeded"}"#;
        assert_eq!(
            MNotifyGateway::extract_error(body).as_deref(),
            Some("quota exceeded")
        );
    }

    #[test]
    fn test_extract_error_passes_on_plain_text() {
        assert!(MNotifyGateway::extract_error("1002|invalid sender").is_none());
        assert!(MNotifyGateway::extract_error("").is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = MNotifyConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }
}
