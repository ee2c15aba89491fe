//! Auth endpoint handlers.
//!
//! One file per endpoint; every handler is generic over the injected
//! collaborators so tests can run the full HTTP surface against mocks.

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod verify_forgot_password;
pub mod verify_user;

use std::sync::Arc;

use bz_core::repositories::UserRepository;
use bz_core::services::auth::AuthService;
use bz_core::services::otp::{NotifierTrait, OtpStoreTrait};
use bz_core::services::token::TokenService;

/// Application state that holds the shared services
pub struct AppState<U, N, S>
where
    U: UserRepository,
    N: NotifierTrait,
    S: OtpStoreTrait,
{
    pub auth_service: Arc<AuthService<U, N, S>>,
    pub token_service: Arc<TokenService>,
}
