//! Single-send message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::campaign::DeliveryStatus;

/// A single SMS to one contact, tracked directly on the row.
///
/// Inserted with status `pending` before the outbound call so a record
/// exists even if the process crashes mid-send; the status and provider
/// response are updated in place once the call resolves. Deliberately
/// lighter-weight than the campaign path: no campaign/history pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: Uuid,

    /// User who triggered the send
    pub user_id: Uuid,

    /// Contact the message is addressed to
    pub contact_id: Uuid,

    /// Message body
    pub content: String,

    /// Delivery status, mutated in place after the outbound call
    pub status: DeliveryStatus,

    /// Raw provider response or error description
    pub provider_response: Option<String>,

    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the message was last updated
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new pending message
    pub fn pending(user_id: Uuid, contact_id: Uuid, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            contact_id,
            content: content.into(),
            status: DeliveryStatus::Pending,
            provider_response: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records the outcome of the outbound call
    pub fn resolve(&mut self, status: DeliveryStatus, provider_response: impl Into<String>) {
        self.status = status;
        self.provider_response = Some(provider_response.into());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_message() {
        let message = Message::pending(Uuid::new_v4(), Uuid::new_v4(), "Hi");
        assert_eq!(message.status, DeliveryStatus::Pending);
        assert!(message.provider_response.is_none());
    }

    #[test]
    fn test_resolve_mutates_in_place() {
        let mut message = Message::pending(Uuid::new_v4(), Uuid::new_v4(), "Hi");
        let id = message.id;
        message.resolve(DeliveryStatus::Sent, "1000|accepted");

        assert_eq!(message.id, id);
        assert_eq!(message.status, DeliveryStatus::Sent);
        assert_eq!(message.provider_response.as_deref(), Some("1000|accepted"));
    }
}
