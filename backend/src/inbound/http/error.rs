//! HTTP error payloads and mapping from domain errors.
//!
//! Error bodies are bare JSON strings (the `Display` text of the underlying
//! error), not structured envelopes. Internal failures are redacted before
//! they reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::StoreError;

/// Transport-level error returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Domain rejection carrying the client-facing message.
    #[error("{0}")]
    Domain(#[from] Error),
    /// Adapter failure surfaced by a store port.
    #[error("{0}")]
    Store(#[from] StoreError),
    /// Invariant breach inside a handler.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Convenience constructor for [`ApiError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn to_status_code(&self) -> StatusCode {
        match self {
            Self::Domain(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(Error::Forbidden(_)) => StatusCode::FORBIDDEN,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Domain(err) => {
                HttpResponse::build(self.status_code()).json(err.to_string())
            }
            Self::Store(_) | Self::Internal(_) => {
                error!(error = %self, "internal failure surfaced to client");
                HttpResponse::build(self.status_code()).json("Internal server error")
            }
        }
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_string(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("JSON string body")
    }

    #[actix_web::test]
    async fn not_found_maps_to_404_with_bare_string_body() {
        let err = ApiError::from(Error::not_found("User (ghost) does not exist"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_string(err.error_response()).await;
        assert_eq!(body, "User (ghost) does not exist");
    }

    #[actix_web::test]
    async fn forbidden_maps_to_403() {
        let err = ApiError::from(Error::forbidden("Incorrect credentials"));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        let body = body_string(err.error_response()).await;
        assert_eq!(body, "Incorrect credentials");
    }

    #[actix_web::test]
    async fn store_failures_are_redacted() {
        let err = ApiError::from(StoreError::query("lock poisoned"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(err.error_response()).await;
        assert_eq!(body, "Internal server error");
    }

    #[actix_web::test]
    async fn internal_invariant_breaches_are_redacted() {
        let err = ApiError::internal("credential without profile for ada");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(err.error_response()).await;
        assert_eq!(body, "Internal server error");
    }
}
