//! Dispatch-specific error types.
//!
//! These errors cover the provider resolution and send pipeline. They are
//! deliberately separate from the general-purpose [`DomainError`] variants
//! so callers can react to each class differently: `NoProviderAvailable`
//! maps to service-unavailable, `UnsupportedProvider` to a configuration
//! error, and `LoggingFailed` is fatal.
//!
//! [`DomainError`]: crate::errors::DomainError

use thiserror::Error;

/// Errors raised by the provider selection and send pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No usable credential anywhere in the resolution chain
    /// (no default, no user credential, no system fallback).
    #[error("No SMS provider available for this account")]
    NoProviderAvailable,

    /// A credential names a provider no gateway is registered for.
    /// Fails closed; an operator must register a gateway or fix the name.
    #[error("Unsupported SMS provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// The outbound call failed (transport, timeout, or provider
    /// rejection). Recorded, not raised to the caller.
    #[error("SMS send failed: {cause}")]
    SendFailed { cause: String },

    /// The audit-trail write itself failed after a send failure. Escalated
    /// as fatal: losing the audit trail is worse than losing the SMS.
    #[error("Failed to record send attempt: {cause}")]
    LoggingFailed { cause: String },
}

impl DispatchError {
    /// Stable error code for API consumers
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoProviderAvailable => "NO_PROVIDER_AVAILABLE",
            Self::UnsupportedProvider { .. } => "UNSUPPORTED_PROVIDER",
            Self::SendFailed { .. } => "SEND_FAILED",
            Self::LoggingFailed { .. } => "LOGGING_FAILED",
        }
    }
}
