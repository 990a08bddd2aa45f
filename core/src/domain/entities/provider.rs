//! SMS provider catalog entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An SMS provider known to the platform (e.g. "MNotify", "Twilio").
///
/// The catalog is administrator-managed and referenced by both user and
/// system credentials; provider names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Unique identifier for the provider
    pub id: Uuid,

    /// Unique provider name, matched case-insensitively against gateways
    pub name: String,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Timestamp when the provider was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the provider was last updated
    pub updated_at: DateTime<Utc>,
}

impl Provider {
    /// Creates a new Provider instance
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the provider
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Replaces the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}
