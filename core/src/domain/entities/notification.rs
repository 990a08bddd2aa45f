//! Notification entity for in-app delivery notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-app notification addressed to one user.
///
/// `kind` is a free-form discriminator ("campaign", "billing", ...) that
/// lets clients group or filter the feed without schema changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification
    pub id: Uuid,

    /// User the notification is addressed to
    pub recipient_id: Uuid,

    /// Short headline shown in the feed
    pub title: String,

    /// Full notification text
    pub body: String,

    /// Category discriminator
    pub kind: String,

    /// Timestamp when the notification was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the notification was last updated
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new Notification instance
    pub fn new(
        recipient_id: Uuid,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            title: title.into(),
            body: body.into(),
            kind: kind.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
