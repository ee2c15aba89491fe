use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bz_core::domain::entities::user::Role;
use bz_core::repositories::UserRepository;
use bz_core::services::credentials::RegistrationData;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_shared::utils::validation::mask_email;

use crate::dto::auth::{MessageResponse, RegisterRequest};
use crate::handlers::error::{to_http_response, validation_failure};

use super::AppState;

/// Handler for POST /user-registration
///
/// Validates the payload, then runs the registration pipeline: duplicate
/// check, OTP restrictions, request tracking, and code delivery. Responds
/// 200 once the activation OTP is on its way; the identity itself is only
/// created at verification time.
pub async fn register<U, N, S>(
    state: web::Data<AppState<U, N, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing registration for {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.0.validate() {
        return validation_failure(&request_id, &errors);
    }

    let data = RegistrationData {
        name: request.name.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
        phone_number: request.phone_number.clone(),
        country: request.country.clone(),
    };

    match state.auth_service.register(&data, Role::User).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "OTP sent to your email. Please verify your account.",
        )),
        Err(error) => to_http_response(&request_id, &error),
    }
}
