//! Credential entities: per-user provider credentials, the per-user
//! default-provider pointer, and system-wide fallback credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's API key for one SMS provider.
///
/// At most one credential exists per (user_id, provider_id) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    /// Unique identifier for the credential
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Provider this credential is scoped to
    pub provider_id: Uuid,

    /// Provider API key
    pub api_key: String,

    /// Optional sender label registered with the provider
    pub sender_id: Option<String>,

    /// Timestamp when the credential was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the credential was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserCredential {
    /// Creates a new UserCredential instance
    pub fn new(
        user_id: Uuid,
        provider_id: Uuid,
        api_key: impl Into<String>,
        sender_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            provider_id,
            api_key: api_key.into(),
            sender_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the API key
    pub fn rotate_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        self.updated_at = Utc::now();
    }

    /// Replaces the sender label
    pub fn set_sender_id(&mut self, sender_id: Option<String>) {
        self.sender_id = sender_id;
        self.updated_at = Utc::now();
    }
}

/// A user's explicit default provider.
///
/// At most one row exists per user at rest; setting a new default
/// atomically replaces any prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDefaultProvider {
    /// Unique identifier for the default row
    pub id: Uuid,

    /// Owning user (unique)
    pub user_id: Uuid,

    /// Preferred provider
    pub provider_id: Uuid,

    /// Timestamp when the default was set
    pub created_at: DateTime<Utc>,
}

impl UserDefaultProvider {
    /// Creates a new UserDefaultProvider instance
    pub fn new(user_id: Uuid, provider_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            provider_id,
            created_at: Utc::now(),
        }
    }
}

/// System-wide fallback credential for one provider.
///
/// Administrator-managed; used when a user has no usable credential of
/// their own. One per provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCredential {
    /// Unique identifier for the credential
    pub id: Uuid,

    /// Provider this credential is scoped to (unique)
    pub provider_id: Uuid,

    /// Provider API key
    pub api_key: String,

    /// Optional sender label registered with the provider
    pub sender_id: Option<String>,

    /// Timestamp when the credential was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the credential was last updated
    pub updated_at: DateTime<Utc>,
}

impl SystemCredential {
    /// Creates a new SystemCredential instance
    pub fn new(provider_id: Uuid, api_key: impl Into<String>, sender_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            provider_id,
            api_key: api_key.into(),
            sender_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the API key
    pub fn rotate_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_credential() {
        let user_id = Uuid::new_v4();
        let provider_id = Uuid::new_v4();
        let credential = UserCredential::new(user_id, provider_id, "key-123", None);

        assert_eq!(credential.user_id, user_id);
        assert_eq!(credential.provider_id, provider_id);
        assert_eq!(credential.api_key, "key-123");
        assert!(credential.sender_id.is_none());
    }

    #[test]
    fn test_rotate_api_key() {
        let mut credential =
            UserCredential::new(Uuid::new_v4(), Uuid::new_v4(), "old-key", None);
        credential.rotate_api_key("new-key");
        assert_eq!(credential.api_key, "new-key");
    }

    #[test]
    fn test_new_default_provider() {
        let user_id = Uuid::new_v4();
        let provider_id = Uuid::new_v4();
        let default = UserDefaultProvider::new(user_id, provider_id);
        assert_eq!(default.user_id, user_id);
        assert_eq!(default.provider_id, provider_id);
    }
}
