//! User entity representing a registered identity in the Bazario system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the type of account in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A buyer shopping on the marketplace
    User,
    /// A seller operating a shop on the marketplace
    Seller,
}

impl Role {
    /// String form used in token claims and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Seller => "seller",
        }
    }
}

/// User entity representing a registered identity
///
/// The password hash is bcrypt output; the plaintext never reaches this
/// type. Response payloads use [`crate::domain::value_objects::UserSummary`]
/// so the hash is never echoed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address (unique key)
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Account role
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: String, name: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
