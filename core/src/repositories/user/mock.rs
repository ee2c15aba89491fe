//! In-memory mock user repository for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};

use super::r#trait::UserRepository;

/// In-memory repository backed by a mutex-guarded vector
///
/// Mirrors the store-level uniqueness guarantee: `create` rejects a
/// duplicate email the same way the MySQL unique index does.
#[derive(Default)]
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.lock().unwrap().push(user);
        repo
    }

    /// Number of stored users, for assertions
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Validation(ValidationError::DuplicateEmail));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.set_password_hash(password_hash.to_string());
                Ok(())
            }
            None => Err(DomainError::Validation(ValidationError::UnknownEmail)),
        }
    }
}
