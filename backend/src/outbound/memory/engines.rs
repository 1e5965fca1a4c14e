//! In-memory engine store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::Engine;
use crate::domain::ports::{EngineStore, StoreError};

/// Process-local engine map keyed by engine id.
///
/// No handler reads or writes this store; it exists so the engines resource
/// shares the user maps' seam. It stays empty for the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryEngineStore {
    records: RwLock<HashMap<String, Engine>>,
}

impl MemoryEngineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EngineStore for MemoryEngineStore {
    async fn list(&self) -> Result<Vec<Engine>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::query("engine map lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Engine>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::query("engine map lock poisoned"))?;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, engine: Engine) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("engine map lock poisoned"))?;
        records.insert(engine.id.clone(), engine);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Option<Engine>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("engine map lock poisoned"))?;
        Ok(records.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_and_stays_empty_without_writers() {
        let store = MemoryEngineStore::new();
        assert!(store.list().await.expect("list").is_empty());
        assert!(store.get("1").await.expect("get").is_none());
    }

    #[tokio::test]
    async fn put_get_remove_round_trips() {
        let store = MemoryEngineStore::new();
        store.put(Engine::sample("e-1", 1)).await.expect("put");
        assert!(store.get("e-1").await.expect("get").is_some());
        assert!(store.remove("e-1").await.expect("remove").is_some());
        assert!(store.list().await.expect("list").is_empty());
    }
}
