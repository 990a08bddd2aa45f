//! Mock implementation of MessageRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::campaign::DeliveryStatus;
use crate::domain::entities::message::Message;
use crate::errors::DomainError;

use super::trait_::MessageRepository;

/// In-memory message repository for testing
pub struct MockMessageRepository {
    messages: Arc<RwLock<HashMap<Uuid, Message>>>,
}

impl MockMessageRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of messages currently stored
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, DomainError> {
        let mut messages = self.messages.write().await;
        messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn update_outcome(
        &self,
        id: Uuid,
        status: DeliveryStatus,
        provider_response: &str,
    ) -> Result<Message, DomainError> {
        let mut messages = self.messages.write().await;
        let message = messages.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Message".to_string(),
        })?;
        message.resolve(status, provider_response);
        Ok(message.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.get(&id).cloned())
    }
}
