//! Send outcome and dispatch summary types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether the gateway accepted a send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Success,
    Failure,
}

/// Normalized result of one outbound gateway call.
///
/// Transport failures, non-2xx responses and provider rejections all
/// collapse into a failure outcome; the raw response body (or the best
/// available diagnostic) is carried verbatim in both cases so it can be
/// persisted for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// Success or failure of the outbound call
    pub status: SendStatus,

    /// Raw provider response body, or the error diagnostic on failure
    pub raw_response: String,
}

impl SendOutcome {
    /// A successful outcome carrying the raw provider response
    pub fn success(raw_response: impl Into<String>) -> Self {
        Self {
            status: SendStatus::Success,
            raw_response: raw_response.into(),
        }
    }

    /// A failed outcome carrying the best available diagnostic
    pub fn failure(raw_response: impl Into<String>) -> Self {
        Self {
            status: SendStatus::Failure,
            raw_response: raw_response.into(),
        }
    }

    /// Whether the gateway accepted the send
    pub fn is_success(&self) -> bool {
        self.status == SendStatus::Success
    }
}

/// Aggregate counts returned to the caller of a bulk send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Campaign recorded for this attempt
    pub campaign_id: Uuid,

    /// Recipients the provider accepted
    pub total_sent: usize,

    /// Recipients the attempt failed for
    pub total_failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        let ok = SendOutcome::success("1000|accepted");
        assert!(ok.is_success());
        assert_eq!(ok.raw_response, "1000|accepted");

        let err = SendOutcome::failure("connection timed out");
        assert!(!err.is_success());
        assert_eq!(err.raw_response, "connection timed out");
    }
}
