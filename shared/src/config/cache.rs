//! Cache (Redis) configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// Redis cache configuration for the lockout state store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection pool size
    pub pool_size: u32,

    /// Per-operation timeout in milliseconds
    pub operation_timeout_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            pool_size: 10,
            operation_timeout_ms: 2000,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            url: env_or("REDIS_URL", "redis://127.0.0.1:6379"),
            pool_size: env_parse("REDIS_POOL_SIZE", 10),
            operation_timeout_ms: env_parse("REDIS_OPERATION_TIMEOUT_MS", 2000),
        }
    }
}
