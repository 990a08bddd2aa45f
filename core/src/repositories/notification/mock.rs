//! Mock notification repository for testing

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

use super::trait_::NotificationRepository;

/// In-memory mock implementation of `NotificationRepository`.
///
/// Keeps insertion order so paging tests stay deterministic even when
/// several notifications share a timestamp.
#[derive(Clone, Default)]
pub struct MockNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl MockNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.notifications.read().await.len()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        self.notifications
            .write()
            .await
            .push(notification.clone());
        Ok(notification)
    }

    async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .iter()
            .rev()
            .filter(|n| n.recipient_id == recipient_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
