//! Port abstraction over the engine id → record map.

use async_trait::async_trait;

use crate::domain::Engine;

use super::StoreError;

/// Keyed access to engine records.
///
/// The engine handlers serve synthesized sample data and never touch this
/// port; the store stays empty for the lifetime of the process. It is wired
/// anyway so the engines resource has the same seam as the user maps.
#[async_trait]
pub trait EngineStore: Send + Sync {
    /// Every stored engine, in map-iteration order.
    async fn list(&self) -> Result<Vec<Engine>, StoreError>;

    /// Fetch one engine by id.
    async fn get(&self, id: &str) -> Result<Option<Engine>, StoreError>;

    /// Insert or silently overwrite the record keyed by its id.
    async fn put(&self, engine: Engine) -> Result<(), StoreError>;

    /// Remove and return the record, if present.
    async fn remove(&self, id: &str) -> Result<Option<Engine>, StoreError>;
}
