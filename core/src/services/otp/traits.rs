//! Traits for the lockout state store and the notifier.

use async_trait::async_trait;

/// Trait for the shared key-value lockout state store
///
/// All mutation goes through per-key atomic operations; in particular
/// `incr_and_get` must be a single atomic increment-and-read against the
/// store, never a separate read followed by a write.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Write a value with an expiry
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Atomically increment a counter and return the new value, refreshing
    /// its expiry
    async fn incr_and_get(&self, key: &str, ttl_seconds: u64) -> Result<i64, String>;

    /// Delete one or more keys
    async fn delete(&self, keys: &[&str]) -> Result<(), String>;
}

/// Trait for out-of-band message delivery
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a templated message to a recipient
    ///
    /// `template` names the mail template; `data` holds the substitution
    /// values. Rendering and transport are implementation concerns.
    async fn deliver(
        &self,
        to: &str,
        subject: &str,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<(), String>;
}
