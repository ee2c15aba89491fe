//! Configuration modules for all server components
//!
//! Each section can be built from environment variables with `from_env()`
//! or filled with development defaults via `Default`.

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;
pub mod otp;
pub mod server;

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::SmtpConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Read an environment variable with a fallback value
pub(crate) fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Read an environment variable and parse it, falling back on error
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
