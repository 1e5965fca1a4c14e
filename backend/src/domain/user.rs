//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Assignable user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrative account.
    Admin,
    /// Regular account; the default on registration.
    Master,
}

/// Application user profile.
///
/// Created on registration and never mutated afterwards; password changes
/// touch only the paired [`Credential`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique key into the user store.
    pub username: String,
    pub role: UserRole,
    /// Creation time as unix seconds.
    pub created_at: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Username/password pair checked by login and password updates.
///
/// Stored next to — not inside — the user profile. Deleting a user does not
/// remove its credential entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Key matching the owning [`User`].
    pub username: String,
    /// Plaintext password; nothing in this service hashes it.
    pub password: String,
}
