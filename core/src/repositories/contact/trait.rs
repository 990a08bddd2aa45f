//! Contact repository trait.
//!
//! Contact management lives outside this core; the dispatch pipeline only
//! needs read access to resolve outbound addresses.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

/// Read-only repository trait for contacts
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a contact by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DomainError>;

    /// Find a contact id by phone number (exact match)
    async fn find_id_by_phone(&self, phone: &str) -> Result<Option<Uuid>, DomainError>;
}
