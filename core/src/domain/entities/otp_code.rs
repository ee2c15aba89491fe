//! One-time code entity and generation.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest issued code value
pub const CODE_MIN: u32 = 1000;

/// Largest issued code value
pub const CODE_MAX: u32 = 9999;

/// Number of digits in an issued code
pub const CODE_LENGTH: usize = 4;

/// A one-time code bound to an email address
///
/// The code itself lives only in the lockout state store; this entity is
/// the in-flight representation between generation and delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Email address the code proves ownership of
    pub email: String,

    /// The 4-digit numeric code
    pub code: String,

    /// When the code was generated
    pub created_at: DateTime<Utc>,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Generates a fresh code for an email address
    ///
    /// Uses the OS CSPRNG; the value is uniform over `1000..=9999`.
    pub fn generate(email: impl Into<String>, ttl_seconds: u64) -> Self {
        let code = OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string();
        let now = Utc::now();
        Self {
            email: email.into(),
            code,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Checks whether a submitted string has the shape of a valid code
    pub fn is_valid_format(code: &str) -> bool {
        code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit())
    }

    /// Whether the code is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
