//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, OtpError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Every operational failure maps to one of the bridged variants; the
/// remaining variants cover collaborator failures and taxonomy cases the
/// HTTP layer needs (forbidden, not-found, rate-limited).
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Forbidden access")]
    Forbidden,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Too many requests, please try again later.")]
    RateLimited,

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Whether the error is expected and safe to show to a client
    ///
    /// Database and internal errors are non-operational: the HTTP layer
    /// logs them with full context and returns a generic message.
    pub fn is_operational(&self) -> bool {
        !matches!(
            self,
            DomainError::Database { .. } | DomainError::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
