//! Provider selection result types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a credential was chosen for a send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// The user's explicit default provider had a matching credential
    UserDefault,
    /// Picked uniformly at random among the user's own credentials
    UserRandom,
    /// Fell back to a system-wide credential
    SystemDefault,
}

impl SelectionKind {
    /// String representation for logs and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserDefault => "user_default",
            Self::UserRandom => "user_random",
            Self::SystemDefault => "system_default",
        }
    }
}

/// Who owns the selected credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialOwner {
    /// A user-configured credential
    User(Uuid),
    /// The administrator-managed system fallback
    System,
}

/// A credential joined with its provider name, ready for dispatch.
///
/// The provider name is what the executor matches (case-insensitively)
/// against registered gateways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCredential {
    /// Identifier of the underlying credential row
    pub credential_id: Uuid,

    /// Provider the credential is scoped to
    pub provider_id: Uuid,

    /// Provider name from the catalog
    pub provider_name: String,

    /// Provider API key
    pub api_key: String,

    /// Optional sender label configured on the credential
    pub sender_id: Option<String>,

    /// Credential owner (user or system)
    pub owner: CredentialOwner,
}

/// Result of provider resolution for one send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Which resolution rule produced the credential
    pub kind: SelectionKind,

    /// The credential to dispatch with
    pub credential: ResolvedCredential,
}
