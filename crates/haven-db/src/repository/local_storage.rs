//! # Local Storage Repository
//!
//! A string key/value store with browser-storage semantics: reading a
//! missing key is `None`, writing overwrites, removing a missing key is a
//! no-op.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for the `local_storage` table.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    pool: SqlitePool,
}

impl LocalStorageRepository {
    /// Creates a new LocalStorageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorageRepository { pool }
    }

    /// Reads the value stored under `key`.
    pub async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();

        debug!(key = %key, bytes = value.len(), "Writing local storage item");

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes `key`. Returns whether anything was removed.
    pub async fn remove_item(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Removing local storage item");

        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All stored keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let db = db().await;
        assert_eq!(db.local_storage().get_item("bookstore_cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let db = db().await;
        let storage = db.local_storage();

        storage.set_item("bookstore_cart", "[]").await.unwrap();
        assert_eq!(
            storage.get_item("bookstore_cart").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let db = db().await;
        let storage = db.local_storage();

        storage.set_item("bookstore_user", "{\"id\":\"1\"}").await.unwrap();
        storage.set_item("bookstore_user", "{\"id\":\"2\"}").await.unwrap();

        assert_eq!(
            storage.get_item("bookstore_user").await.unwrap().as_deref(),
            Some("{\"id\":\"2\"}")
        );
        assert_eq!(storage.keys().await.unwrap(), vec!["bookstore_user"]);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let db = db().await;
        let storage = db.local_storage();

        storage.set_item("a", "1").await.unwrap();
        storage.set_item("b", "2").await.unwrap();

        assert!(storage.remove_item("a").await.unwrap());
        assert!(!storage.remove_item("a").await.unwrap());
        assert_eq!(storage.get_item("a").await.unwrap(), None);
        assert_eq!(storage.keys().await.unwrap(), vec!["b"]);
    }
}
