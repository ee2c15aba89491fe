//! MySQL implementation of the UserRepository trait.
//!
//! The `users` table carries a unique index on `email`; that index is the
//! authoritative duplicate-identity guard, and a duplicate-key insert maps
//! to the domain's `DuplicateEmail` error so a lost registration race still
//! produces a clean client response.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bz_core::domain::entities::user::{Role, User};
use bz_core::errors::{DomainError, ValidationError};
use bz_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| database_error("id", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| database_error("role", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID in users.id: {}", e),
            })?,
            email: row
                .try_get("email")
                .map_err(|e| database_error("email", e))?,
            name: row.try_get("name").map_err(|e| database_error("name", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| database_error("password_hash", e))?,
            role: match role.as_str() {
                "seller" => Role::Seller,
                _ => Role::User,
            },
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| database_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| database_error("updated_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, name, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT 1 FROM users WHERE email = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.is_some())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, name, password_hash, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Validation(ValidationError::DuplicateEmail)
                } else {
                    query_error(e)
                }
            })?;

        Ok(user)
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError> {
        let query = "UPDATE users SET password_hash = ?, updated_at = ? WHERE email = ?";

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Validation(ValidationError::UnknownEmail));
        }

        Ok(())
    }
}

fn is_duplicate_key(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

fn query_error(error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", error),
    }
}

fn database_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to read column {}: {}", column, error),
    }
}
