//! Lockout state store backed by Redis.

use async_trait::async_trait;

use bz_core::services::otp::OtpStoreTrait;

use super::redis_client::RedisClient;

/// Redis implementation of the core's lockout state store trait
///
/// A thin adapter: all timeout, retry, and atomicity concerns live in
/// [`RedisClient`]; errors cross the trait boundary as strings and are
/// classified by the core.
#[derive(Clone)]
pub struct RedisOtpStore {
    redis_client: RedisClient,
}

impl RedisOtpStore {
    /// Create a new store over an existing Redis client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }
}

#[async_trait]
impl OtpStoreTrait for RedisOtpStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.redis_client.get(key).await.map_err(|e| e.to_string())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.redis_client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn incr_and_get(&self, key: &str, ttl_seconds: u64) -> Result<i64, String> {
        self.redis_client
            .incr_and_get(key, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), String> {
        self.redis_client
            .delete(keys)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
