//! Session token entities: JWT claims, token pairs, and cookie transport.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Access token lifetime in minutes
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token lifetime in days
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Issuer claim stamped into every token
pub const JWT_ISSUER: &str = "bazario-auth";

/// Which of the two session tokens a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Cookie name the token travels under
    pub fn cookie_name(&self) -> &'static str {
        match self {
            TokenKind::Access => "access_token",
            TokenKind::Refresh => "refresh_token",
        }
    }

    /// Token lifetime in seconds
    pub fn expiry_seconds(&self) -> i64 {
        match self {
            TokenKind::Access => ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            TokenKind::Refresh => REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

/// JWT claims carried by both session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's UUID
    pub sub: String,

    /// Account role ("user" or "seller")
    pub role: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Builds claims for a token of the given kind with its default expiry
    pub fn new(user_id: Uuid, role: Role, kind: TokenKind) -> Self {
        Self::with_expiry(user_id, role, kind.expiry_seconds())
    }

    /// Builds claims expiring the given number of seconds from now
    pub fn with_expiry(user_id: Uuid, role: Role, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expires = now + Duration::seconds(expiry_seconds);
        Self {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Parses the subject claim back into a UUID
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// A freshly issued access/refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Longer-lived refresh token
    pub refresh_token: String,
}

/// Transport attributes for a session token cookie
///
/// Both cookies are httpOnly + Secure and cross-site capable; only the
/// max-age differs between the two token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    /// Cookie name
    pub name: &'static str,

    /// Not readable from script
    pub http_only: bool,

    /// Only sent over TLS
    pub secure: bool,

    /// SameSite=None (requires `secure`)
    pub same_site_none: bool,

    /// Cookie lifetime in seconds
    pub max_age_seconds: i64,
}
