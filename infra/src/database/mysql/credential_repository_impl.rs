//! MySQL implementations of the credential store traits.
//!
//! Three repositories over three tables: `user_credentials`,
//! `user_default_providers` and `system_credentials`. The joined
//! projections pull `providers.name` in so the selector never performs a
//! second lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tr_core::domain::entities::credential::{
    SystemCredential, UserCredential, UserDefaultProvider,
};
use tr_core::domain::value_objects::{CredentialOwner, ResolvedCredential};
use tr_core::errors::DomainError;
use tr_core::repositories::{
    DefaultProviderRepository, SystemCredentialRepository, UserCredentialRepository,
};

fn parse_uuid(value: &str, what: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Internal {
        message: format!("Invalid {} UUID: {}", what, e),
    })
}

fn db_err(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}

/// MySQL-backed user credentials
pub struct MySqlUserCredentialRepository {
    pool: MySqlPool,
}

impl MySqlUserCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: &sqlx::mysql::MySqlRow) -> Result<UserCredential, DomainError> {
        let id: String = row.try_get("id").map_err(db_err("Failed to get id"))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(db_err("Failed to get user_id"))?;
        let provider_id: String = row
            .try_get("provider_id")
            .map_err(db_err("Failed to get provider_id"))?;

        Ok(UserCredential {
            id: parse_uuid(&id, "credential")?,
            user_id: parse_uuid(&user_id, "user")?,
            provider_id: parse_uuid(&provider_id, "provider")?,
            api_key: row
                .try_get("api_key")
                .map_err(db_err("Failed to get api_key"))?,
            sender_id: row
                .try_get("sender_id")
                .map_err(db_err("Failed to get sender_id"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("Failed to get created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_err("Failed to get updated_at"))?,
        })
    }

    fn row_to_resolved(row: &sqlx::mysql::MySqlRow) -> Result<ResolvedCredential, DomainError> {
        let credential = Self::row_to_credential(row)?;
        let provider_name: String = row
            .try_get("provider_name")
            .map_err(db_err("Failed to get provider_name"))?;

        Ok(ResolvedCredential {
            credential_id: credential.id,
            provider_id: credential.provider_id,
            provider_name,
            api_key: credential.api_key,
            sender_id: credential.sender_id,
            owner: CredentialOwner::User(credential.user_id),
        })
    }
}

#[async_trait]
impl UserCredentialRepository for MySqlUserCredentialRepository {
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let exists_row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM user_credentials WHERE user_id = ? AND provider_id = ?) AS present",
        )
        .bind(credential.user_id.to_string())
        .bind(credential.provider_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check credential uniqueness"))?;
        let present: i8 = exists_row
            .try_get("present")
            .map_err(db_err("Failed to read existence result"))?;
        if present == 1 {
            return Err(DomainError::Validation {
                message: "Credential already exists for this provider".to_string(),
            });
        }

        sqlx::query(
            r#"
            INSERT INTO user_credentials (id, user_id, provider_id, api_key, sender_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credential.id.to_string())
        .bind(credential.user_id.to_string())
        .bind(credential.provider_id.to_string())
        .bind(&credential.api_key)
        .bind(&credential.sender_id)
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to create credential"))?;

        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserCredential>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, provider_id, api_key, sender_id, created_at, updated_at
            FROM user_credentials WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find credential"))?;

        row.as_ref().map(Self::row_to_credential).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<UserCredential>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, provider_id, api_key, sender_id, created_at, updated_at
            FROM user_credentials WHERE user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list credentials"))?;

        rows.iter().map(Self::row_to_credential).collect()
    }

    async fn find_by_user_with_provider(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ResolvedCredential>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT uc.id, uc.user_id, uc.provider_id, uc.api_key, uc.sender_id,
                   uc.created_at, uc.updated_at, p.name AS provider_name
            FROM user_credentials uc
            INNER JOIN providers p ON p.id = uc.provider_id
            WHERE uc.user_id = ?
            ORDER BY p.name
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list credentials with provider"))?;

        rows.iter().map(Self::row_to_resolved).collect()
    }

    async fn find_for_provider(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<ResolvedCredential>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT uc.id, uc.user_id, uc.provider_id, uc.api_key, uc.sender_id,
                   uc.created_at, uc.updated_at, p.name AS provider_name
            FROM user_credentials uc
            INNER JOIN providers p ON p.id = uc.provider_id
            WHERE uc.user_id = ? AND uc.provider_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(provider_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find credential for provider"))?;

        row.as_ref().map(Self::row_to_resolved).transpose()
    }

    async fn update(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let result = sqlx::query(
            "UPDATE user_credentials SET api_key = ?, sender_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&credential.api_key)
        .bind(&credential.sender_id)
        .bind(credential.updated_at)
        .bind(credential.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to update credential"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Credential {}", credential.id),
            });
        }
        Ok(credential)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM user_credentials WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete credential"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM user_credentials WHERE provider_id = ?) AS present",
        )
        .bind(provider_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check provider usage"))?;

        let present: i8 = row
            .try_get("present")
            .map_err(db_err("Failed to read existence result"))?;
        Ok(present == 1)
    }
}

/// MySQL-backed per-user default-provider pointer
pub struct MySqlDefaultProviderRepository {
    pool: MySqlPool,
}

impl MySqlDefaultProviderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_default(row: &sqlx::mysql::MySqlRow) -> Result<UserDefaultProvider, DomainError> {
        let id: String = row.try_get("id").map_err(db_err("Failed to get id"))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(db_err("Failed to get user_id"))?;
        let provider_id: String = row
            .try_get("provider_id")
            .map_err(db_err("Failed to get provider_id"))?;

        Ok(UserDefaultProvider {
            id: parse_uuid(&id, "default")?,
            user_id: parse_uuid(&user_id, "user")?,
            provider_id: parse_uuid(&provider_id, "provider")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("Failed to get created_at"))?,
        })
    }
}

#[async_trait]
impl DefaultProviderRepository for MySqlDefaultProviderRepository {
    async fn set(
        &self,
        user_id: Uuid,
        provider_id: Uuid,
    ) -> Result<UserDefaultProvider, DomainError> {
        let default = UserDefaultProvider::new(user_id, provider_id);

        // Replace-in-one-transaction: the user never observes two defaults,
        // and a crash cannot leave zero behind either.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        sqlx::query("DELETE FROM user_default_providers WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to clear prior default"))?;

        sqlx::query(
            r#"
            INSERT INTO user_default_providers (id, user_id, provider_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(default.id.to_string())
        .bind(default.user_id.to_string())
        .bind(default.provider_id.to_string())
        .bind(default.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to insert default"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit default replacement"))?;

        Ok(default)
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<UserDefaultProvider>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, provider_id, created_at FROM user_default_providers WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to get default"))?;

        row.as_ref().map(Self::row_to_default).transpose()
    }

    async fn remove(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM user_default_providers WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to remove default"))?;

        Ok(result.rows_affected() > 0)
    }
}

/// MySQL-backed system fallback credentials
pub struct MySqlSystemCredentialRepository {
    pool: MySqlPool,
}

impl MySqlSystemCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: &sqlx::mysql::MySqlRow) -> Result<SystemCredential, DomainError> {
        let id: String = row.try_get("id").map_err(db_err("Failed to get id"))?;
        let provider_id: String = row
            .try_get("provider_id")
            .map_err(db_err("Failed to get provider_id"))?;

        Ok(SystemCredential {
            id: parse_uuid(&id, "credential")?,
            provider_id: parse_uuid(&provider_id, "provider")?,
            api_key: row
                .try_get("api_key")
                .map_err(db_err("Failed to get api_key"))?,
            sender_id: row
                .try_get("sender_id")
                .map_err(db_err("Failed to get sender_id"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("Failed to get created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_err("Failed to get updated_at"))?,
        })
    }

    fn row_to_resolved(row: &sqlx::mysql::MySqlRow) -> Result<ResolvedCredential, DomainError> {
        let credential = Self::row_to_credential(row)?;
        let provider_name: String = row
            .try_get("provider_name")
            .map_err(db_err("Failed to get provider_name"))?;

        Ok(ResolvedCredential {
            credential_id: credential.id,
            provider_id: credential.provider_id,
            provider_name,
            api_key: credential.api_key,
            sender_id: credential.sender_id,
            owner: CredentialOwner::System,
        })
    }
}

#[async_trait]
impl SystemCredentialRepository for MySqlSystemCredentialRepository {
    async fn create(
        &self,
        credential: SystemCredential,
    ) -> Result<SystemCredential, DomainError> {
        let exists_row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM system_credentials WHERE provider_id = ?) AS present",
        )
        .bind(credential.provider_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check system credential uniqueness"))?;
        let present: i8 = exists_row
            .try_get("present")
            .map_err(db_err("Failed to read existence result"))?;
        if present == 1 {
            return Err(DomainError::Validation {
                message: "System credential already exists for this provider".to_string(),
            });
        }

        sqlx::query(
            r#"
            INSERT INTO system_credentials (id, provider_id, api_key, sender_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credential.id.to_string())
        .bind(credential.provider_id.to_string())
        .bind(&credential.api_key)
        .bind(&credential.sender_id)
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to create system credential"))?;

        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemCredential>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, provider_id, api_key, sender_id, created_at, updated_at
            FROM system_credentials WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find system credential"))?;

        row.as_ref().map(Self::row_to_credential).transpose()
    }

    async fn list(&self) -> Result<Vec<SystemCredential>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, provider_id, api_key, sender_id, created_at, updated_at
            FROM system_credentials
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list system credentials"))?;

        rows.iter().map(Self::row_to_credential).collect()
    }

    async fn list_with_provider(&self) -> Result<Vec<ResolvedCredential>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT sc.id, sc.provider_id, sc.api_key, sc.sender_id,
                   sc.created_at, sc.updated_at, p.name AS provider_name
            FROM system_credentials sc
            INNER JOIN providers p ON p.id = sc.provider_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list system credentials with provider"))?;

        rows.iter().map(Self::row_to_resolved).collect()
    }

    async fn update(
        &self,
        credential: SystemCredential,
    ) -> Result<SystemCredential, DomainError> {
        let result = sqlx::query(
            "UPDATE system_credentials SET api_key = ?, sender_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&credential.api_key)
        .bind(&credential.sender_id)
        .bind(credential.updated_at)
        .bind(credential.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to update system credential"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("SystemCredential {}", credential.id),
            });
        }
        Ok(credential)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM system_credentials WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete system credential"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_for_provider(&self, provider_id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM system_credentials WHERE provider_id = ?) AS present",
        )
        .bind(provider_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check provider usage"))?;

        let present: i8 = row
            .try_get("present")
            .map_err(db_err("Failed to read existence result"))?;
        Ok(present == 1)
    }
}
