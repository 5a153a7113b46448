use chrono::{DateTime, Utc};
use common::{Content, Document, ListOrder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::db::DbPool;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored document could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl DocumentRow {
    fn decode<T: DeserializeOwned>(self) -> Result<Document<T>, serde_json::Error> {
        Ok(Document {
            id: self.id,
            fields: serde_json::from_str(&self.body)?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// Document store over the `documents` and `admins` tables.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list<T: Content>(&self) -> Result<Vec<Document<T>>, StoreError> {
        let sql = match T::ORDER {
            ListOrder::NewestFirst => {
                "SELECT id, body, created_at FROM documents WHERE collection = ?
                 ORDER BY created_at DESC, rowid DESC"
            }
            ListOrder::Insertion => {
                "SELECT id, body, created_at FROM documents WHERE collection = ? ORDER BY rowid ASC"
            }
        };

        let rows: Vec<DocumentRow> = sqlx::query_as(sql)
            .bind(T::COLLECTION)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| row.decode().map_err(StoreError::from))
            .collect()
    }

    pub async fn get<T: Content>(&self, id: &str) -> Result<Option<Document<T>>, StoreError> {
        let row: Option<DocumentRow> = sqlx::query_as(
            "SELECT id, body, created_at FROM documents WHERE id = ? AND collection = ?",
        )
        .bind(id)
        .bind(T::COLLECTION)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DocumentRow::decode).transpose()?)
    }

    /// Validates `fields`, assigns an id and creation time, and persists the record.
    pub async fn insert<T: Content>(&self, fields: T) -> Result<Document<T>, StoreError> {
        fields.validate()?;

        let document = Document {
            id: Uuid::new_v4().to_string(),
            fields,
            created_at: Utc::now(),
        };
        let body = serde_json::to_string(&document.fields)?;

        sqlx::query("INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)")
            .bind(&document.id)
            .bind(T::COLLECTION)
            .bind(body)
            .bind(document.created_at)
            .execute(&self.pool)
            .await?;

        Ok(document)
    }

    /// Applies `patch` to the stored record. `None` when no such record exists.
    pub async fn update<T: Content>(
        &self,
        id: &str,
        patch: T::Patch,
    ) -> Result<Option<Document<T>>, StoreError> {
        let Some(mut document) = self.get::<T>(id).await? else {
            return Ok(None);
        };

        document.fields.apply(patch);
        document.fields.validate()?;
        let body = serde_json::to_string(&document.fields)?;

        let result = sqlx::query("UPDATE documents SET body = ? WHERE id = ? AND collection = ?")
            .bind(body)
            .bind(id)
            .bind(T::COLLECTION)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(document))
    }

    /// Returns whether a record was removed.
    pub async fn delete<T: Content>(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ? AND collection = ?")
            .bind(id)
            .bind(T::COLLECTION)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn clear<T: Content>(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ?")
            .bind(T::COLLECTION)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // --- Admins ---

    pub async fn find_admin(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    pub async fn insert_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Admin, StoreError> {
        let admin = Admin {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };

        sqlx::query(
            "INSERT INTO admins (id, username, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&admin.id)
        .bind(&admin.username)
        .bind(&admin.password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(admin)
    }

    pub async fn clear_admins(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM admins")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
