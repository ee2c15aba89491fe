use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::repositories::UserRepository;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::dto::auth::{VerifyUserRequest, VerifyUserResponse};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /verify-user
///
/// Verifies the activation OTP and creates the identity. Responds 201 on
/// success.
pub async fn verify_user<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<VerifyUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing account verification for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    match state
        .auth_service
        .activate(&request.email, &request.otp, &request.password, &request.name)
        .await
    {
        Ok(_user) => HttpResponse::Created().json(VerifyUserResponse {
            success: true,
            message: "User registered successfully!".to_string(),
        }),
        Err(error) => to_http_response(&request_id, &error),
    }
}
