//! Token signing configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// Session token configuration
///
/// Access and refresh tokens are signed with distinct secrets so that a
/// compromise of one does not compromise the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens
    pub access_token_secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_token_secret: String,

    /// Access token lifetime in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::from("dev-access-secret"),
            refresh_token_secret: String::from("dev-refresh-secret"),
            access_expiry_minutes: 15,
            refresh_expiry_days: 7,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            access_token_secret: env_or("ACCESS_TOKEN_SECRET", "dev-access-secret"),
            refresh_token_secret: env_or("REFRESH_TOKEN_SECRET", "dev-refresh-secret"),
            access_expiry_minutes: env_parse("ACCESS_TOKEN_EXPIRY_MINUTES", 15),
            refresh_expiry_days: env_parse("REFRESH_TOKEN_EXPIRY_DAYS", 7),
        }
    }
}
