//! Port abstraction over the username → credential map.

use async_trait::async_trait;

use crate::domain::Credential;

use super::StoreError;

/// Keyed access to login credentials.
///
/// Nothing currently calls [`CredentialStore::remove`]: deleting a user
/// leaves its credential behind. The method is part of the port so that a
/// future cleanup can repair the pairing without a new seam.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch one credential by username.
    async fn get(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Insert or silently overwrite the record keyed by its username.
    async fn put(&self, credential: Credential) -> Result<(), StoreError>;

    /// Remove and return the record, if present.
    async fn remove(&self, username: &str) -> Result<Option<Credential>, StoreError>;
}
