//! Error type definitions for authentication, OTP, token, and validation
//! failures.
//!
//! Messages are client-facing: restriction errors state the concrete wait
//! period and wrong-code errors state the remaining attempt count.

use thiserror::Error;

/// Authentication errors surfaced at login
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User doesn't exist!")]
    UserNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// OTP lifecycle errors
///
/// `Cooldown`, `AccountLocked`, and `SpamLocked` are the three restriction
/// states, checked in that priority order. `InvalidOrExpired` covers both a
/// missing/expired record and a mismatched code so a caller cannot probe
/// which of the two happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Please wait 1 minute before requesting a new OTP.")]
    Cooldown,

    #[error("Account locked due to multiple failed OTP attempts. Please try again after 30 minutes.")]
    AccountLocked,

    #[error("Too many OTP requests. Please wait 1 hour before requesting again.")]
    SpamLocked,

    #[error("Invalid or Expired OTP! {attempts_remaining} attempts left.")]
    InvalidOrExpired { attempts_remaining: i64 },

    #[error("Failed to send OTP email. Please try again later.")]
    DeliveryFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields for {role} registration.")]
    MissingFields { role: String },

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("All fields are required!")]
    AllFieldsRequired,

    #[error("Email and password are required!")]
    CredentialsRequired,

    #[error("Email is required!")]
    EmailRequired,

    #[error("Email and OTP are required!")]
    EmailAndOtpRequired,

    #[error("User with this email already exists.")]
    DuplicateEmail,

    #[error("User not found with this email!")]
    UnknownEmail,

    #[error("New password must be different from the old password!")]
    PasswordUnchanged,
}
