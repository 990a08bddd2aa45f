//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::campaign::DeliveryStatus;
use tr_core::domain::entities::message::Message;
use tr_core::errors::DomainError;
use tr_core::repositories::MessageRepository;

/// MySQL-backed single-send message store
pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> Result<Message, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let contact_id: String =
            row.try_get("contact_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get contact_id: {}", e),
            })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(Message {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid message UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            contact_id: Uuid::parse_str(&contact_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid contact UUID: {}", e),
            })?,
            content: row.try_get("content").map_err(|e| DomainError::Database {
                message: format!("Failed to get content: {}", e),
            })?,
            status: DeliveryStatus::parse(&status).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown delivery status '{}'", status),
            })?,
            provider_response: row
                .try_get("provider_response")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get provider_response: {}", e),
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
impl MessageRepository for MySqlMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, user_id, contact_id, content, status, provider_response, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(message.user_id.to_string())
        .bind(message.contact_id.to_string())
        .bind(&message.content)
        .bind(message.status.as_str())
        .bind(&message.provider_response)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to insert message: {}", e),
        })?;

        Ok(message)
    }

    async fn update_outcome(
        &self,
        id: Uuid,
        status: DeliveryStatus,
        provider_response: &str,
    ) -> Result<Message, DomainError> {
        let result = sqlx::query(
            "UPDATE messages SET status = ?, provider_response = ?, updated_at = ? WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(provider_response)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to update message: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Message {}", id),
            });
        }

        self.find_by_id(id).await?.ok_or(DomainError::NotFound {
            resource: format!("Message {}", id),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, contact_id, content, status, provider_response, created_at, updated_at
            FROM messages WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find message: {}", e),
        })?;

        row.as_ref().map(Self::row_to_message).transpose()
    }
}
