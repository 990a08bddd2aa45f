//! Message repository trait for the single-send path.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::campaign::DeliveryStatus;
use crate::domain::entities::message::Message;
use crate::errors::DomainError;

/// Repository trait for single-send messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a new message row (normally with status `pending`)
    async fn insert(&self, message: Message) -> Result<Message, DomainError>;

    /// Update a message's status and provider response in place after the
    /// outbound call has resolved
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No message with the given id
    async fn update_outcome(
        &self,
        id: Uuid,
        status: DeliveryStatus,
        provider_response: &str,
    ) -> Result<Message, DomainError>;

    /// Find a message by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, DomainError>;
}
