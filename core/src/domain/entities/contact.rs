//! Contact entity (read-only collaborator for the single-send path).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An address-book entry owned by a user.
///
/// Contact management (CRUD, CSV import) lives outside this core; the
/// dispatch pipeline only reads contacts to resolve outbound addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Phone number in international format
    pub phone_number: String,

    /// Timestamp when the contact was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the contact was last updated
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new Contact instance
    pub fn new(
        user_id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
