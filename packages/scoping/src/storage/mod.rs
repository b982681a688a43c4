// ABOUTME: Session persistence trait and error types
// ABOUTME: Storage is an injected collaborator; sqlite and in-memory implementations provided

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nacscope_core::ScopingSession;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Listing row: enough to render a session picker without loading documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub completion_percentage: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Keyed session storage: save/load/list/delete by id.
///
/// `save_session` is an idempotent upsert; saving the same document
/// twice is indistinguishable from saving it once.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save_session(&self, session: &ScopingSession) -> StorageResult<()>;

    /// Returns None when no session has that id
    async fn load_session(&self, id: &str) -> StorageResult<Option<ScopingSession>>;

    /// Most recently created first
    async fn list_sessions(&self) -> StorageResult<Vec<SessionSummary>>;

    /// Errors with NotFound when no session has that id
    async fn delete_session(&self, id: &str) -> StorageResult<()>;
}

impl SessionSummary {
    pub fn from_session(session: &ScopingSession) -> Self {
        SessionSummary {
            id: session.id.clone(),
            name: session.name.clone(),
            completion_percentage: session.completion_percentage,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
