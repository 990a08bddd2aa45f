//! MySQL implementation of the ContactRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::contact::Contact;
use tr_core::errors::DomainError;
use tr_core::repositories::ContactRepository;

/// MySQL-backed contact lookup
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: &sqlx::mysql::MySqlRow) -> Result<Contact, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Contact {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid contact UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get first_name: {}", e),
                })?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get last_name: {}", e),
                })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get phone_number: {}", e),
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
impl ContactRepository for MySqlContactRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, first_name, last_name, email, phone_number, created_at, updated_at
            FROM contacts WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find contact: {}", e),
        })?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn find_id_by_phone(&self, phone: &str) -> Result<Option<Uuid>, DomainError> {
        let row = sqlx::query("SELECT id FROM contacts WHERE phone_number = ? LIMIT 1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find contact by phone: {}", e),
            })?;

        match row {
            Some(row) => {
                let id: String = row.try_get("id").map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?;
                Ok(Some(Uuid::parse_str(&id).map_err(|e| {
                    DomainError::Internal {
                        message: format!("Invalid contact UUID: {}", e),
                    }
                })?))
            }
            None => Ok(None),
        }
    }
}
