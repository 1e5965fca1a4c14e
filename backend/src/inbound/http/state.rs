//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they depend on
//! the domain store ports only and remain testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::{CredentialStore, EngineStore, UserStore};

/// Dependency bundle handed to HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Username → profile map.
    pub users: Arc<dyn UserStore>,
    /// Username → credential map.
    pub credentials: Arc<dyn CredentialStore>,
    /// Engine id → record map. Wired for parity with the user maps; the
    /// engine handlers serve sample data and never touch it.
    pub engines: Arc<dyn EngineStore>,
}
