//! Authentication flow result types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Public view of a user, safe to echo to clients
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Result of a successful login: the user summary plus the session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub user: UserSummary,
    pub tokens: TokenPair,
}
