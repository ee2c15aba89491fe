//! Database module - MySQL implementations using SQLx

pub mod mysql;

pub use mysql::MySqlUserRepository;

use bz_shared::config::database::DatabaseConfig;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::info;

use crate::InfrastructureError;

/// Create the MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        max_connections = config.max_connections,
        "Creating MySQL connection pool"
    );
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;
    Ok(pool)
}
