//! Notification feed service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::NotificationRepository;

/// Page size used when the caller does not ask for one.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Writes notifications and pages through a user's feed, newest first.
pub struct NotificationService<N>
where
    N: NotificationRepository,
{
    notifications: Arc<N>,
}

impl<N> NotificationService<N>
where
    N: NotificationRepository,
{
    pub fn new(notifications: Arc<N>) -> Self {
        Self { notifications }
    }

    /// Record a notification for a user.
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Empty title or body
    pub async fn notify(
        &self,
        recipient_id: Uuid,
        title: &str,
        body: &str,
        kind: &str,
    ) -> DomainResult<Notification> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Notification title must not be empty".to_string(),
            });
        }
        if body.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Notification body must not be empty".to_string(),
            });
        }

        let notification = self
            .notifications
            .create(Notification::new(recipient_id, title, body, kind))
            .await?;
        info!(
            notification_id = %notification.id,
            recipient_id = %recipient_id,
            kind = %notification.kind,
            "Notification recorded"
        );
        Ok(notification)
    }

    /// Fetch one page of a user's feed, newest first.
    ///
    /// Pages are 1-based; `page` 0 is treated as the first page and a
    /// `per_page` of 0 falls back to the default page size.
    pub async fn list(
        &self,
        recipient_id: Uuid,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<Notification>> {
        let page = page.max(1);
        let limit = if per_page == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            per_page
        };
        let offset = (page - 1).saturating_mul(limit);

        self.notifications
            .list_for_recipient(recipient_id, offset, limit)
            .await
    }
}
