//! End-to-end tests for the auth HTTP surface, running the real app
//! factory against mock collaborators.

use std::sync::Arc;

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::SameSite;
use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{json, Value};

use bz_api::app::create_app;
use bz_api::routes::auth::AppState;
use bz_core::domain::entities::user::{Role, User};
use bz_core::repositories::user::MockUserRepository;
use bz_core::services::auth::AuthService;
use bz_core::services::credentials::CredentialService;
use bz_core::services::otp::mock::{MockNotifier, MockOtpStore};
use bz_core::services::otp::OtpService;
use bz_core::services::token::TokenService;
use bz_shared::config::auth::AuthConfig;
use bz_shared::config::otp::OtpConfig;

struct TestContext {
    state: web::Data<AppState<MockUserRepository, MockNotifier, MockOtpStore>>,
    notifier: Arc<MockNotifier>,
    store: Arc<MockOtpStore>,
}

fn test_context() -> TestContext {
    test_context_with_repo(MockUserRepository::new())
}

fn test_context_with_repo(repo: MockUserRepository) -> TestContext {
    let repo = Arc::new(repo);
    let notifier = Arc::new(MockNotifier::new());
    let store = Arc::new(MockOtpStore::new());

    let otp_service = Arc::new(OtpService::new(
        notifier.clone(),
        store.clone(),
        OtpConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(AuthConfig::default()));
    let auth_service = Arc::new(AuthService::new(
        repo,
        otp_service,
        CredentialService::with_cost(4),
        token_service.clone(),
    ));

    TestContext {
        state: web::Data::new(AppState {
            auth_service,
            token_service,
        }),
        notifier,
        store,
    }
}

fn seeded_user(email: &str, password: &str) -> User {
    let hash = CredentialService::with_cost(4)
        .hash_password(password)
        .unwrap();
    User::new(email.to_string(), "A".to_string(), hash, Role::User)
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn registration_sends_otp() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/user-registration")
        .set_json(json!({"name": "A", "email": "a@x.com", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "OTP sent to your email. Please verify your account."
    );
    assert_eq!(ctx.notifier.delivery_count(), 1);
}

#[actix_web::test]
async fn registration_with_malformed_email_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/user-registration")
        .set_json(json!({"name": "A", "email": "not-an-email", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(ctx.notifier.delivery_count(), 0);
}

#[actix_web::test]
async fn registration_for_existing_email_is_rejected() {
    let ctx = test_context_with_repo(MockUserRepository::with_existing_user(seeded_user(
        "a@x.com", "p",
    )));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/user-registration")
        .set_json(json!({"name": "A", "email": "a@x.com", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User with this email already exists.");
}

#[actix_web::test]
async fn register_verify_then_replay_scenario() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/user-registration")
        .set_json(json!({"name": "A", "email": "a@x.com", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let code = ctx.notifier.last_code().unwrap();
    let verify_body = json!({"email": "a@x.com", "otp": code, "password": "p", "name": "A"});

    let req = test::TestRequest::post()
        .uri("/verify-user")
        .set_json(&verify_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully!");

    // Replaying the consumed code: the account now exists, so the
    // duplicate check fires first
    let req = test::TestRequest::post()
        .uri("/verify-user")
        .set_json(&verify_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // For a different email the replayed code is invalid
    let req = test::TestRequest::post()
        .uri("/verify-user")
        .set_json(json!({"email": "b@x.com", "otp": code, "password": "p", "name": "B"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid or Expired OTP!"));
}

#[actix_web::test]
async fn wrong_otp_reports_remaining_attempts_in_details() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verify-user-forgot-password-otp")
        .set_json(json!({"email": "a@x.com", "otp": "0000"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["attemptsRemaining"], 2);
}

#[actix_web::test]
async fn login_unknown_email_returns_401() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login-user")
        .set_json(json!({"email": "ghost@x.com", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("User doesn't exist"));
}

#[actix_web::test]
async fn login_wrong_password_returns_401() {
    let ctx = test_context_with_repo(MockUserRepository::with_existing_user(seeded_user(
        "a@x.com", "p",
    )));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login-user")
        .set_json(json!({"email": "a@x.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn login_success_sets_session_cookies() {
    let ctx = test_context_with_repo(MockUserRepository::with_existing_user(seeded_user(
        "a@x.com", "p",
    )));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login-user")
        .set_json(json!({"email": "a@x.com", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    {
        let cookies: Vec<_> = resp.response().cookies().collect();
        let access = cookies
            .iter()
            .find(|c| c.name() == "access_token")
            .expect("access_token cookie set");
        let refresh = cookies
            .iter()
            .find(|c| c.name() == "refresh_token")
            .expect("refresh_token cookie set");

        assert_eq!(access.http_only(), Some(true));
        assert_eq!(access.secure(), Some(true));
        assert_eq!(access.same_site(), Some(SameSite::None));
        assert_eq!(access.max_age(), Some(CookieDuration::minutes(15)));
        assert_eq!(refresh.max_age(), Some(CookieDuration::days(7)));
    }

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[actix_web::test]
async fn forgot_password_flow_over_http() {
    let ctx = test_context_with_repo(MockUserRepository::with_existing_user(seeded_user(
        "a@x.com", "old",
    )));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/forgot-user-password")
        .set_json(json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "OTP sent to your email. Please check your inbox."
    );

    let code = ctx.notifier.last_code().unwrap();

    let req = test::TestRequest::post()
        .uri("/verify-user-forgot-password-otp")
        .set_json(json!({"email": "a@x.com", "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/reset-password-user")
        .set_json(json!({"email": "a@x.com", "otp": code, "newPassword": "new"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password reset successfully!");
}

#[actix_web::test]
async fn reset_password_rejects_unchanged_password() {
    let ctx = test_context_with_repo(MockUserRepository::with_existing_user(seeded_user(
        "a@x.com", "same",
    )));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/reset-password-user")
        .set_json(json!({"email": "a@x.com", "otp": "1234", "newPassword": "same"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("must be different from the old password"));
}

#[actix_web::test]
async fn spam_lock_surfaces_through_registration_endpoint() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let payload = json!({"name": "A", "email": "a@x.com", "password": "p"});

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/user-registration")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        ctx.store.expire("otp_cooldown:a@x.com");
    }

    let req = test::TestRequest::post()
        .uri("/user-registration")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("1 hour"));
}

#[actix_web::test]
async fn unknown_route_returns_404_json() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
