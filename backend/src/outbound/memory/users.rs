//! In-memory user store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{StoreError, UserStore};

/// Process-local user map keyed by username.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given users.
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        let records = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::query("user map lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::query("user map lock poisoned"))?;
        Ok(records.get(username).cloned())
    }

    async fn put(&self, user: User) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("user map lock poisoned"))?;
        records.insert(user.username.clone(), user);
        Ok(())
    }

    async fn remove(&self, username: &str) -> Result<Option<User>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::query("user map lock poisoned"))?;
        Ok(records.remove(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    fn user(username: &str) -> User {
        User {
            username: username.into(),
            role: UserRole::Master,
            created_at: 0,
            first_name: "First".into(),
            last_name: "Last".into(),
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryUserStore::new();
        store.put(user("ada")).await.expect("put");
        let fetched = store.get("ada").await.expect("get");
        assert_eq!(fetched.map(|u| u.username), Some("ada".to_owned()));
    }

    #[tokio::test]
    async fn put_overwrites_existing_key_silently() {
        let store = MemoryUserStore::new();
        store.put(user("ada")).await.expect("put");
        let mut replacement = user("ada");
        replacement.first_name = "Augusta".into();
        store.put(replacement).await.expect("overwrite");
        let fetched = store.get("ada").await.expect("get").expect("present");
        assert_eq!(fetched.first_name, "Augusta");
        assert_eq!(store.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn remove_returns_the_record_once() {
        let store = MemoryUserStore::seeded([user("ada")]);
        assert!(store.remove("ada").await.expect("remove").is_some());
        assert!(store.remove("ada").await.expect("remove again").is_none());
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn seeded_store_lists_its_seeds() {
        let store = MemoryUserStore::seeded([user("ada"), user("grace")]);
        let mut names: Vec<_> = store
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|u| u.username)
            .collect();
        names.sort();
        assert_eq!(names, ["ada", "grace"]);
    }
}
