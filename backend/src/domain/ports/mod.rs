//! Store ports decoupling handlers from the backing maps.
//!
//! Handlers depend on these traits only, so a real backing store can later
//! be substituted for the in-memory adapters without touching handler logic.

mod credential_store;
mod engine_store;
mod user_store;

pub use credential_store::CredentialStore;
pub use engine_store::EngineStore;
pub use user_store::UserStore;

/// Failures raised by store adapters.
///
/// The in-memory adapters only produce [`StoreError::Query`] (and only when
/// a lock is poisoned); the `Connection` variant exists for future backing
/// stores that actually connect somewhere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Read or mutation failed during execution.
    #[error("store operation failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl StoreError {
    /// Convenience constructor for [`StoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`StoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
