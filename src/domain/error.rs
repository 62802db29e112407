//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! status codes and the `{ "message": ... }` response body; the domain only
//! records a failure category and a human-readable message.

use thiserror::Error;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request payload is malformed or fails validation.
    InvalidRequest,
    /// No document with the requested identifier exists.
    NotFound,
    /// An unexpected failure, typically a storage write error.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty; constructors are only called with literal or
///   formatted messages.
///
/// # Examples
/// ```
/// use tidemap::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::not_found("poi 42 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Create a new error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
