//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::notification::Notification;
use tr_core::errors::DomainError;
use tr_core::repositories::NotificationRepository;

/// MySQL-backed notification feed
pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &sqlx::mysql::MySqlRow) -> Result<Notification, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let recipient_id: String =
            row.try_get("recipient_id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get recipient_id: {}", e),
                })?;

        Ok(Notification {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid notification UUID: {}", e),
            })?,
            recipient_id: Uuid::parse_str(&recipient_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid recipient UUID: {}", e),
            })?,
            title: row.try_get("title").map_err(|e| DomainError::Database {
                message: format!("Failed to get title: {}", e),
            })?,
            body: row.try_get("body").map_err(|e| DomainError::Database {
                message: format!("Failed to get body: {}", e),
            })?,
            kind: row.try_get("kind").map_err(|e| DomainError::Database {
                message: format!("Failed to get kind: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, recipient_id, title, body, kind, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(notification.id.to_string())
        .bind(notification.recipient_id.to_string())
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(&notification.kind)
        .bind(notification.created_at)
        .bind(notification.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to create notification: {}", e),
        })?;

        Ok(notification)
    }

    async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, recipient_id, title, body, kind, created_at, updated_at
            FROM notifications
            WHERE recipient_id = ?
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(recipient_id.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to list notifications: {}", e),
        })?;

        rows.iter().map(Self::row_to_notification).collect()
    }
}
