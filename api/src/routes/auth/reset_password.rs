use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::dto::auth::{MessageResponse, ResetPasswordRequest};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /reset-password-user
///
/// Replaces the password after a verified reset. The new password must
/// differ from the current one.
pub async fn reset_password<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing password reset for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    match state
        .auth_service
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset successfully!")),
        Err(error) => to_http_response(&request_id, &error),
    }
}
