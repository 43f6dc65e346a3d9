//! # Settings Repository
//!
//! Raw key/value access to the `settings` table.
//!
//! ## Table
//! ```text
//! ┌──────────────────┬─────────────────┬──────────────────────────┐
//! │ key (PK)         │ value           │ updated_at               │
//! ├──────────────────┼─────────────────┼──────────────────────────┤
//! │ user_state       │ REVIEW          │ 2024-01-01T10:00:00Z     │
//! │ first_open_time  │ 1704067200000   │ 2024-01-01T00:00:00Z     │
//! └──────────────────┴─────────────────┴──────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for raw settings rows.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Gets a stored value, `None` when the key was never written.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Gets a stored value, failing with `NotFound` when absent.
    pub async fn require(&self, key: &str) -> DbResult<String> {
        self.get(key)
            .await?
            .ok_or_else(|| DbError::not_found("Setting", key))
    }

    /// Inserts or replaces a value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, value = %value, "Writing setting");

        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Writes several values atomically.
    pub async fn set_many<'a, I>(&self, entries: I) -> DbResult<usize>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut tx: Transaction<'_, Sqlite> = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let now = Utc::now();
        let mut written = 0;

        for (key, value) in entries {
            debug!(key = %key, value = %value, "Writing setting");
            sqlx::query(UPSERT_SQL)
                .bind(key)
                .bind(&value)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            written += 1;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(written)
    }

    /// Removes a value. Returns whether a row was deleted.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Removing setting");

        let result = sqlx::query("DELETE FROM settings WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All stored `(key, value)` pairs ordered by key.
    pub async fn all(&self) -> DbResult<Vec<(String, String)>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM settings ORDER BY key")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }
}

const UPSERT_SQL: &str = r#"
    INSERT INTO settings (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
"#;
