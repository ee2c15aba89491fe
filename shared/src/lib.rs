//! Shared utilities and common types for the Bazario auth server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Validation utilities

pub mod config;
pub mod utils;

// Re-export the most commonly used items
pub use config::auth::AuthConfig;
pub use config::cache::CacheConfig;
pub use config::database::DatabaseConfig;
pub use config::email::SmtpConfig;
pub use config::otp::OtpConfig;
pub use config::server::ServerConfig;
