//! MySQL implementation of the ProviderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::provider::Provider;
use tr_core::errors::DomainError;
use tr_core::repositories::ProviderRepository;

/// MySQL-backed provider catalog
pub struct MySqlProviderRepository {
    pool: MySqlPool,
}

impl MySqlProviderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_provider(row: &sqlx::mysql::MySqlRow) -> Result<Provider, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Provider {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid provider UUID: {}", e),
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
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ProviderRepository for MySqlProviderRepository {
    async fn create(&self, provider: Provider) -> Result<Provider, DomainError> {
        let exists_row = sqlx::query("SELECT EXISTS(SELECT 1 FROM providers WHERE name = ?) AS present")
            .bind(&provider.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check provider name: {}", e),
            })?;
        let present: i8 = exists_row.try_get("present").map_err(|e| DomainError::Database {
            message: format!("Failed to read existence result: {}", e),
        })?;
        if present == 1 {
            return Err(DomainError::Validation {
                message: format!("Provider '{}' already exists", provider.name),
            });
        }

        sqlx::query(
            r#"
            INSERT INTO providers (id, name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(provider.id.to_string())
        .bind(&provider.name)
        .bind(&provider.description)
        .bind(provider.created_at)
        .bind(provider.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to create provider: {}", e),
        })?;

        Ok(provider)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, description, created_at, updated_at FROM providers WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find provider: {}", e),
        })?;

        row.as_ref().map(Self::row_to_provider).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Provider>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, description, created_at, updated_at FROM providers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find provider by name: {}", e),
        })?;

        row.as_ref().map(Self::row_to_provider).transpose()
    }

    async fn list(&self) -> Result<Vec<Provider>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, description, created_at, updated_at FROM providers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to list providers: {}", e),
        })?;

        rows.iter().map(Self::row_to_provider).collect()
    }

    async fn update(&self, provider: Provider) -> Result<Provider, DomainError> {
        let result = sqlx::query(
            "UPDATE providers SET name = ?, description = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&provider.name)
        .bind(&provider.description)
        .bind(provider.updated_at)
        .bind(provider.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to update provider: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Provider {}", provider.id),
            });
        }
        Ok(provider)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete provider: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
