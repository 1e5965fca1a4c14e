//! In-memory credential store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::Credential;
use crate::domain::ports::{CredentialStore, StoreError};

/// Process-local credential map keyed by username.
///
/// Starts empty; registration is the only writer besides password updates.
/// The seeded admin user has no entry here, so it cannot log in.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, Credential>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::query("credential map lock poisoned"))?;
        Ok(records.get(username).cloned())
    }

    async fn put(&self, credential: Credential) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("credential map lock poisoned"))?;
        records.insert(credential.username.clone(), credential);
        Ok(())
    }

    async fn remove(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("credential map lock poisoned"))?;
        Ok(records.remove(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(username: &str, password: &str) -> Credential {
        Credential {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryCredentialStore::new();
        assert!(store.get("admin").await.expect("get").is_none());
    }

    #[tokio::test]
    async fn put_overwrites_password_for_same_username() {
        let store = MemoryCredentialStore::new();
        store.put(credential("ada", "one")).await.expect("put");
        store.put(credential("ada", "two")).await.expect("put");
        let fetched = store.get("ada").await.expect("get").expect("present");
        assert_eq!(fetched.password, "two");
    }

    #[tokio::test]
    async fn remove_clears_the_entry() {
        let store = MemoryCredentialStore::new();
        store.put(credential("ada", "pw")).await.expect("put");
        assert!(store.remove("ada").await.expect("remove").is_some());
        assert!(store.get("ada").await.expect("get").is_none());
    }
}
