//! # Bazario Core
//!
//! Core business logic and domain layer for the Bazario auth service.
//! This crate contains domain entities, the OTP lifecycle manager, the
//! credential verifier, the session token issuer, the auth flow
//! orchestrator, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
