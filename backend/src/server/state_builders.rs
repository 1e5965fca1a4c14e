//! Construction and seeding of the shared store state.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{User, UserRole};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{MemoryCredentialStore, MemoryEngineStore, MemoryUserStore};

/// Build the HTTP state over fresh in-memory stores.
///
/// The user map is seeded with the default admin profile. The credential map
/// starts empty — the seeded admin has no password and cannot log in — and
/// the engine map stays empty for the process lifetime.
pub fn build_http_state() -> HttpState {
    HttpState {
        users: Arc::new(MemoryUserStore::seeded([seed_admin()])),
        credentials: Arc::new(MemoryCredentialStore::new()),
        engines: Arc::new(MemoryEngineStore::new()),
    }
}

fn seed_admin() -> User {
    User {
        username: "admin".into(),
        role: UserRole::Admin,
        created_at: Utc::now().timestamp(),
        first_name: "admin".into(),
        last_name: "admin".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_is_seeded_with_admin_only() {
        let state = build_http_state();
        let users = state.users.list().await.expect("list users");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert_eq!(users[0].role, UserRole::Admin);
        assert_eq!(users[0].first_name, "admin");
        assert_eq!(users[0].last_name, "admin");
    }

    #[tokio::test]
    async fn seeded_admin_has_no_credential() {
        let state = build_http_state();
        let credential = state.credentials.get("admin").await.expect("get");
        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn engine_store_starts_empty() {
        let state = build_http_state();
        assert!(state.engines.list().await.expect("list").is_empty());
    }
}
