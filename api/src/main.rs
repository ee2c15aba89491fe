use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use bz_api::app::create_app;
use bz_api::routes::auth::AppState;
use bz_core::services::auth::AuthService;
use bz_core::services::credentials::CredentialService;
use bz_core::services::otp::OtpService;
use bz_core::services::token::TokenService;
use bz_infra::cache::{RedisClient, RedisOtpStore};
use bz_infra::database::{create_pool, MySqlUserRepository};
use bz_infra::email::SmtpNotifier;
use bz_shared::config::{
    AuthConfig, CacheConfig, DatabaseConfig, OtpConfig, ServerConfig, SmtpConfig,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Bazario auth service");

    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // External collaborators: MySQL identity store, Redis lockout state
    // store, SMTP notifier
    let pool = create_pool(&DatabaseConfig::from_env())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let redis_client = RedisClient::new(CacheConfig::from_env())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    match redis_client.health_check().await {
        Ok(true) => info!("Lockout state store reachable"),
        _ => log::warn!("Lockout state store did not answer PING"),
    }
    let notifier = SmtpNotifier::new(&SmtpConfig::from_env())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Core services wired by dependency injection
    let user_repository = Arc::new(MySqlUserRepository::new(pool));
    let otp_service = Arc::new(OtpService::new(
        Arc::new(notifier),
        Arc::new(RedisOtpStore::new(redis_client)),
        OtpConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(AuthConfig::from_env()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_service,
        CredentialService::new(),
        token_service.clone(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
