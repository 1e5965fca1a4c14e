//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic; the HTTP adapter maps them to status
//! codes and plain-string bodies. `Display` carries the exact client-facing
//! message.

/// Rejections produced by resource operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The addressed resource key is absent.
    #[error("{0}")]
    NotFound(String),
    /// Credential mismatch or business-rule violation.
    #[error("{0}")]
    Forbidden(String),
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Convenience constructor for [`Error::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}
