//! Application factory.
//!
//! Builds the actix-web App with middleware and the auth routes. Generic
//! over the injected collaborators so the same factory serves production
//! wiring and mock-backed tests.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    forgot_password::forgot_password, login::login, register::register,
    reset_password::reset_password, verify_forgot_password::verify_forgot_password,
    verify_user::verify_user, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, N, S>(
    app_state: web::Data<AppState<U, N, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(actix_web::middleware::Compat::new(Logger::default()))
        .wrap(actix_web::middleware::Compat::new(cors))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes
        .route("/user-registration", web::post().to(register::<U, N, S>))
        .route("/verify-user", web::post().to(verify_user::<U, N, S>))
        .route("/login-user", web::post().to(login::<U, N, S>))
        .route(
            "/forgot-user-password",
            web::post().to(forgot_password::<U, N, S>),
        )
        .route(
            "/verify-user-forgot-password-otp",
            web::post().to(verify_forgot_password::<U, N, S>),
        )
        .route(
            "/reset-password-user",
            web::post().to(reset_password::<U, N, S>),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bazario-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "status": "error",
        "message": "The requested resource was not found",
    }))
}
