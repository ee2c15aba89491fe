use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::domain::entities::token::TokenKind;
use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::cookies::build_cookie;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /login-user
///
/// Authenticates with email and password and sets the `access_token` and
/// `refresh_token` cookies. The response body carries the user summary
/// only; the password hash never leaves the service.
pub async fn login<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing login for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(outcome) => {
            let refresh_spec = state.token_service.cookie_spec(TokenKind::Refresh);
            let access_spec = state.token_service.cookie_spec(TokenKind::Access);

            HttpResponse::Ok()
                .cookie(build_cookie(&refresh_spec, outcome.tokens.refresh_token))
                .cookie(build_cookie(&access_spec, outcome.tokens.access_token))
                .json(LoginResponse {
                    message: "Login successful!".to_string(),
                    user: outcome.user,
                })
        }
        Err(error) => to_http_response(&request_id, &error),
    }
}
