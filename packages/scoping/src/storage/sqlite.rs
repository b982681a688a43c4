// ABOUTME: SQLite-backed session store
// ABOUTME: Persists the document as JSON beside indexed identity columns

use async_trait::async_trait;
use nacscope_core::ScopingSession;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use tracing::debug;

use super::{SessionStore, SessionSummary, StorageError, StorageResult};

const SCHEMA: &str = include_str!("../../migrations/001_scoping_sessions.sql");

pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) a database file and ensure the schema exists
    pub async fn connect(path: impl AsRef<Path>) -> StorageResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Run the schema migration; safe to call repeatedly
    pub async fn init_schema(&self) -> StorageResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn save_session(&self, session: &ScopingSession) -> StorageResult<()> {
        debug!("Saving session: {}", session.id);
        let document = serde_json::to_string(session)?;

        sqlx::query(
            "INSERT INTO scoping_sessions (id, name, completion_percentage, document, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 completion_percentage = excluded.completion_percentage,
                 document = excluded.document,
                 updated_at = excluded.updated_at",
        )
        .bind(&session.id)
        .bind(&session.name)
        .bind(session.completion_percentage as i64)
        .bind(&document)
        .bind(session.created_at.to_rfc3339())
        .bind(session.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_session(&self, id: &str) -> StorageResult<Option<ScopingSession>> {
        debug!("Loading session: {}", id);
        let row = sqlx::query("SELECT document FROM scoping_sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                Ok(Some(serde_json::from_str(&document)?))
            }
            None => Ok(None),
        }
    }

    async fn list_sessions(&self) -> StorageResult<Vec<SessionSummary>> {
        let rows = sqlx::query(
            "SELECT id, name, completion_percentage, created_at, updated_at
             FROM scoping_sessions
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let created_at: String = row.get("created_at");
                let updated_at: String = row.get("updated_at");
                Ok(SessionSummary {
                    id: row.get("id"),
                    name: row.get("name"),
                    completion_percentage: row.get::<i64, _>("completion_percentage") as u8,
                    created_at: created_at
                        .parse()
                        .map_err(|e| StorageError::Database(format!("Bad created_at: {}", e)))?,
                    updated_at: updated_at
                        .parse()
                        .map_err(|e| StorageError::Database(format!("Bad updated_at: {}", e)))?,
                })
            })
            .collect()
    }

    async fn delete_session(&self, id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM scoping_sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
