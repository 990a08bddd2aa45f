//! Campaign and message-history entities recording bulk send attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery lifecycle of a message or history record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Recorded but the outbound call has not resolved yet
    Pending,
    /// The provider accepted the send
    Sent,
    /// The send failed (transport, rejection, or configuration)
    Failed,
}

impl DeliveryStatus {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "sent" => Some(Self::Sent),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// One logical bulk-send attempt, successful or not.
///
/// A campaign row is written for every attempt so failures stay auditable;
/// the description text encodes the outcome for human readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique identifier for the campaign
    pub id: Uuid,

    /// User who triggered the send
    pub user_id: Uuid,

    /// Campaign name (e.g. "Bulk SMS - <timestamp>")
    pub name: String,

    /// Human-readable outcome description
    pub description: Option<String>,

    /// Timestamp when the campaign was created
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Creates a new Campaign instance
    pub fn new(user_id: Uuid, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            description,
            created_at: Utc::now(),
        }
    }
}

/// Durable record of what a campaign sent and what the provider replied.
///
/// Owned by exactly one campaign; created inside the same transaction as
/// its campaign so a history row never dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHistory {
    /// Unique identifier for the history record
    pub id: Uuid,

    /// Owning campaign
    pub campaign_id: Uuid,

    /// Ordered recipient addresses
    pub recipients: Vec<String>,

    /// Message body that was sent (or attempted)
    pub content: String,

    /// Delivery status of the attempt
    pub status: DeliveryStatus,

    /// Raw provider response body or error description, kept verbatim
    pub provider_response: Option<String>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl MessageHistory {
    /// Creates a new MessageHistory linked to a campaign
    pub fn new(
        campaign_id: Uuid,
        recipients: Vec<String>,
        content: impl Into<String>,
        status: DeliveryStatus,
        provider_response: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            campaign_id,
            recipients,
            content: content.into(),
            status,
            provider_response,
            created_at: now,
            updated_at: now,
        }
    }
}
