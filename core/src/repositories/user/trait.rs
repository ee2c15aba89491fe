//! User repository trait defining the interface for identity persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations live in the infrastructure layer; the in-memory mock in
//! this module tree backs the unit tests.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// The backing store MUST enforce uniqueness on `email`; the application
/// level duplicate checks are a fast path only, and `create` is expected to
/// fail with [`crate::errors::ValidationError::DuplicateEmail`] when a
/// concurrent registration wins the race.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no user with this email
    /// * `Err(DomainError)` - store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user with this email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// Fails with `ValidationError::DuplicateEmail` when the unique index
    /// rejects the insert.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace the stored password hash for an email address
    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError>;
}
