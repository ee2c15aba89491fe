//! Auth flow orchestrator module
//!
//! Composes the OTP lifecycle manager, the credential verifier, and the
//! session token issuer into the user-facing flows: register,
//! verify-and-activate, login, and forgot/reset password.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
