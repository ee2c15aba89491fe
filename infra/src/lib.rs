//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core depends on:
//! - **Database**: MySQL identity repository using SQLx
//! - **Cache**: Redis client backing the lockout state store
//! - **Email**: SMTP notifier for OTP delivery

/// Cache module - Redis client and the lockout state store
pub mod cache;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - SMTP notifier
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Operation exceeded its time bound
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Email delivery error
    #[error("Email delivery error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
