//! Redis client for the lockout state store.
//!
//! Every operation is bounded by the configured timeout and retried once
//! with backoff on transient failures before the error is surfaced. Counter
//! increments run INCR and EXPIRE in one atomic pipeline so concurrent
//! requests can never under-count.

use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use bz_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Redis client with per-operation timeout and retry
#[derive(Clone)]
pub struct RedisClient {
    /// Multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Per-operation time bound in milliseconds
    operation_timeout_ms: u64,
    /// Total attempts per operation (first try + retries)
    max_attempts: u32,
    /// Base delay between retries (doubles per retry)
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// A timed-out or transiently failed operation is retried once with
    /// backoff, matching the store failure policy.
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::with_retry_config(config, 2, 100).await
    }

    /// Create a new Redis client with custom retry configuration
    pub async fn with_retry_config(
        config: CacheConfig,
        max_attempts: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!("Connecting to Redis at {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::connect_with_retry(client, max_attempts, retry_delay_ms).await?;

        info!("Redis client connected");

        Ok(Self {
            connection,
            operation_timeout_ms: config.operation_timeout_ms,
            max_attempts,
            retry_delay_ms,
        })
    }

    async fn connect_with_retry(
        client: Client,
        max_attempts: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Connecting to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < max_attempts => {
                    warn!(
                        "Redis connection failed (attempt {}/{}): {}. Retrying in {}ms",
                        attempts, max_attempts, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Redis connection failed after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Set a value with an expiry
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("SETEX '{}' ({}s)", key, expiry_seconds);
        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            let value = value.to_string();
            Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await })
        })
        .await
    }

    /// Get a value
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("GET '{}'", key);
        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            Box::pin(async move { conn.get::<_, Option<String>>(key).await })
        })
        .await
    }

    /// Delete one or more keys, returning how many existed
    pub async fn delete(&self, keys: &[&str]) -> Result<u32, InfrastructureError> {
        debug!("DEL {:?}", keys);
        let owned: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        self.execute_with_retry(move |mut conn| {
            let keys = owned.clone();
            Box::pin(async move { conn.del::<_, u32>(keys).await })
        })
        .await
    }

    /// Atomically increment a counter and refresh its expiry
    ///
    /// INCR and EXPIRE run inside one MULTI/EXEC pipeline, so the
    /// increment-and-get is a single round trip and concurrent callers
    /// each observe a distinct count.
    pub async fn incr_and_get(
        &self,
        key: &str,
        expiry_seconds: u64,
    ) -> Result<i64, InfrastructureError> {
        debug!("INCR+EXPIRE '{}' ({}s)", key, expiry_seconds);
        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            Box::pin(async move {
                let (count, _): (i64, i64) = redis::pipe()
                    .atomic()
                    .incr(&key, 1)
                    .expire(&key, expiry_seconds as i64)
                    .query_async(&mut conn)
                    .await?;
                Ok(count)
            })
        })
        .await
    }

    /// Check connectivity with a PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let response: String = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move {
                    redis::cmd("PING").query_async::<_, String>(&mut conn).await
                })
            })
            .await?;
        Ok(response == "PONG")
    }

    /// Run an operation under the timeout, retrying transient failures
    async fn execute_with_retry<F, T>(&self, operation: F) -> Result<T, InfrastructureError>
    where
        F: Fn(
            MultiplexedConnection,
        )
            -> std::pin::Pin<Box<dyn std::future::Future<Output = RedisResult<T>> + Send>>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;
            let conn = self.connection.clone();
            let bound = Duration::from_millis(self.operation_timeout_ms);

            match timeout(bound, operation(conn)).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(e)) if attempts < self.max_attempts && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms",
                        attempts, self.max_attempts, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Ok(Err(e)) => {
                    error!("Redis operation failed after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
                Err(_) if attempts < self.max_attempts => {
                    warn!(
                        "Redis operation timed out after {}ms (attempt {}/{}). Retrying in {}ms",
                        self.operation_timeout_ms, attempts, self.max_attempts, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(_) => {
                    error!(
                        "Redis operation timed out after {} attempts",
                        attempts
                    );
                    return Err(InfrastructureError::Timeout(format!(
                        "operation exceeded {}ms",
                        self.operation_timeout_ms
                    )));
                }
            }
        }
    }
}

/// Check if a Redis error is transient and worth retrying
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
            | redis::ErrorKind::MasterDown
    )
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
