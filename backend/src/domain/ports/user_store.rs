//! Port abstraction over the username → profile map.

use async_trait::async_trait;

use crate::domain::User;

use super::StoreError;

/// Keyed access to user profiles.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every stored user, in map-iteration order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch one user by username.
    async fn get(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert or silently overwrite the record keyed by its username.
    async fn put(&self, user: User) -> Result<(), StoreError>;

    /// Remove and return the record, if present.
    async fn remove(&self, username: &str) -> Result<Option<User>, StoreError>;
}
