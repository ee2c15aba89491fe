use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::dto::auth::{ForgotPasswordRequest, MessageResponse};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /forgot-user-password
///
/// Sends a password-reset OTP to a known email address.
pub async fn forgot_password<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing forgot-password for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "OTP sent to your email. Please check your inbox.",
        )),
        Err(error) => to_http_response(&request_id, &error),
    }
}
