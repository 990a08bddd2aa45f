//! MySQL implementation of the CampaignRepository trait.
//!
//! The campaign and its history row are inserted inside one transaction so
//! a history row can never exist without its campaign. Recipient lists are
//! stored as a JSON column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::campaign::{Campaign, DeliveryStatus, MessageHistory};
use tr_core::errors::DomainError;
use tr_core::repositories::CampaignRepository;

/// MySQL-backed campaign and history store
pub struct MySqlCampaignRepository {
    pool: MySqlPool,
}

impl MySqlCampaignRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_campaign(row: &sqlx::mysql::MySqlRow) -> Result<Campaign, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Campaign {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid campaign UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get description: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    fn row_to_history(row: &sqlx::mysql::MySqlRow) -> Result<MessageHistory, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let campaign_id: String =
            row.try_get("campaign_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get campaign_id: {}", e),
            })?;
        let recipients_json: String =
            row.try_get("recipients").map_err(|e| DomainError::Database {
                message: format!("Failed to get recipients: {}", e),
            })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(MessageHistory {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid history UUID: {}", e),
            })?,
            campaign_id: Uuid::parse_str(&campaign_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid campaign UUID: {}", e),
            })?,
            recipients: serde_json::from_str(&recipients_json).map_err(|e| {
                DomainError::Internal {
                    message: format!("Invalid recipients JSON: {}", e),
                }
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
impl CampaignRepository for MySqlCampaignRepository {
    async fn create_with_history(
        &self,
        campaign: Campaign,
        history: MessageHistory,
    ) -> Result<(Campaign, MessageHistory), DomainError> {
        if history.campaign_id != campaign.id {
            return Err(DomainError::Validation {
                message: "history.campaign_id does not match campaign.id".to_string(),
            });
        }

        let recipients_json =
            serde_json::to_string(&history.recipients).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize recipients: {}", e),
            })?;

        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Database {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        sqlx::query(
            r#"
            INSERT INTO campaigns (id, user_id, name, description, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(campaign.id.to_string())
        .bind(campaign.user_id.to_string())
        .bind(&campaign.name)
        .bind(&campaign.description)
        .bind(campaign.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to insert campaign: {}", e),
        })?;

        sqlx::query(
            r#"
            INSERT INTO message_history (id, campaign_id, recipients, content, status, provider_response, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(history.id.to_string())
        .bind(history.campaign_id.to_string())
        .bind(&recipients_json)
        .bind(&history.content)
        .bind(history.status.as_str())
        .bind(&history.provider_response)
        .bind(history.created_at)
        .bind(history.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to insert message history: {}", e),
        })?;

        tx.commit().await.map_err(|e| DomainError::Database {
            message: format!("Failed to commit campaign write: {}", e),
        })?;

        Ok((campaign, history))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Campaign>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, name, description, created_at FROM campaigns WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find campaign: {}", e),
        })?;

        row.as_ref().map(Self::row_to_campaign).transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Campaign>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, description, created_at
            FROM campaigns WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to list campaigns: {}", e),
        })?;

        rows.iter().map(Self::row_to_campaign).collect()
    }

    async fn history_for_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<MessageHistory>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, campaign_id, recipients, content, status, provider_response, created_at, updated_at
            FROM message_history WHERE campaign_id = ?
            "#,
        )
        .bind(campaign_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to fetch campaign history: {}", e),
        })?;

        rows.iter().map(Self::row_to_history).collect()
    }
}
