use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::dto::auth::{MessageResponse, VerifyForgotPasswordRequest};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /verify-user-forgot-password-otp
///
/// Verifies the reset OTP so the client may proceed to the password reset.
pub async fn verify_forgot_password<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<VerifyForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing forgot-password OTP check for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    match state
        .auth_service
        .verify_forgot_password(&request.email, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "OTP verified, you can now reset your password.",
        )),
        Err(error) => to_http_response(&request_id, &error),
    }
}
