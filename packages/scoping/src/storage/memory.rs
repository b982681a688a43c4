// ABOUTME: In-memory session store for tests and ephemeral runs
// ABOUTME: Same contract as the sqlite store, keyed HashMap behind an async RwLock

use async_trait::async_trait;
use nacscope_core::ScopingSession;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{SessionStore, SessionSummary, StorageError, StorageResult};

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, ScopingSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save_session(&self, session: &ScopingSession) -> StorageResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn load_session(&self, id: &str) -> StorageResult<Option<ScopingSession>> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn list_sessions(&self) -> StorageResult<Vec<SessionSummary>> {
        let mut summaries: Vec<SessionSummary> = self
            .sessions
            .read()
            .await
            .values()
            .map(SessionSummary::from_session)
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn delete_session(&self, id: &str) -> StorageResult<()> {
        match self.sessions.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_load_delete_cycle() {
        let store = MemorySessionStore::new();
        let session = ScopingSession::new("mem00001", "In-memory session");

        store.save_session(&session).await.unwrap();
        assert_eq!(store.len().await, 1);

        let loaded = store.load_session("mem00001").await.unwrap().unwrap();
        assert_eq!(loaded.name, "In-memory session");

        store.delete_session("mem00001").await.unwrap();
        assert!(store.load_session("mem00001").await.unwrap().is_none());
        assert!(matches!(
            store.delete_session("mem00001").await,
            Err(StorageError::NotFound)
        ));
    }
}
