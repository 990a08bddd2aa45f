//! Notification repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

/// Repository trait for the per-user notification feed
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a notification
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// List one page of a user's notifications, newest first.
    ///
    /// `offset` and `limit` are row counts, already resolved from the
    /// caller's page number.
    async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, DomainError>;
}
