//! Auth flow orchestrator implementation.

use std::sync::Arc;

use bz_shared::utils::validation::{mask_email, not_empty};
use tracing::{info, warn};

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{LoginOutcome, UserSummary};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::credentials::{CredentialService, RegistrationData};
use crate::services::otp::{DeliveryContext, MailTemplate, NotifierTrait, OtpService, OtpStoreTrait};
use crate::services::token::TokenService;

/// Auth flow orchestrator
///
/// Each flow is terminal on its first failure; restriction errors are never
/// retried internally, the client retries after the stated wait. All
/// collaborators are injected at construction.
pub struct AuthService<U, N, S>
where
    U: UserRepository,
    N: NotifierTrait,
    S: OtpStoreTrait,
{
    /// Identity store
    user_repository: Arc<U>,
    /// OTP lifecycle manager
    otp_service: Arc<OtpService<N, S>>,
    /// Credential verifier
    credential_service: CredentialService,
    /// Session token issuer
    token_service: Arc<TokenService>,
}

impl<U, N, S> AuthService<U, N, S>
where
    U: UserRepository,
    N: NotifierTrait,
    S: OtpStoreTrait,
{
    /// Create a new auth flow orchestrator
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<N, S>>,
        credential_service: CredentialService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            credential_service,
            token_service,
        }
    }

    /// Start a registration by sending an activation OTP
    ///
    /// Validates the payload, rejects duplicate emails, then runs the OTP
    /// request pipeline: restrictions, request tracking, delivery. No
    /// identity is persisted yet; the pending state lives entirely in the
    /// lockout state store.
    pub async fn register(&self, data: &RegistrationData, role: Role) -> DomainResult<()> {
        CredentialService::validate_registration(data, role)?;

        if self.user_repository.exists_by_email(&data.email).await? {
            warn!(
                email = %mask_email(&data.email),
                event = "register_duplicate_email",
                "Registration attempt for existing email"
            );
            return Err(ValidationError::DuplicateEmail.into());
        }

        self.otp_service.check_restrictions(&data.email).await?;
        self.otp_service.track_request(&data.email).await?;
        self.otp_service
            .send_code(
                &data.email,
                &DeliveryContext::new(data.name.clone(), MailTemplate::UserActivation),
            )
            .await?;

        info!(
            email = %mask_email(&data.email),
            event = "register_otp_sent",
            "Registration OTP sent"
        );
        Ok(())
    }

    /// Verify an activation OTP and create the identity
    ///
    /// The duplicate check runs again here: another registration may have
    /// completed between OTP request and activation. The store's unique
    /// index remains the authoritative guard for the remaining window.
    pub async fn activate(
        &self,
        email: &str,
        code: &str,
        password: &str,
        name: &str,
    ) -> DomainResult<User> {
        if !(not_empty(email) && not_empty(code) && not_empty(password) && not_empty(name)) {
            return Err(ValidationError::AllFieldsRequired.into());
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(ValidationError::DuplicateEmail.into());
        }

        self.otp_service.verify_code(email, code).await?;

        let password_hash = self.credential_service.hash_password(password)?;
        let user = User::new(
            email.to_string(),
            name.to_string(),
            password_hash,
            Role::User,
        );
        let created = self.user_repository.create(user).await?;

        info!(
            email = %mask_email(email),
            user_id = %created.id,
            event = "user_activated",
            "User registered and activated"
        );
        Ok(created)
    }

    /// Authenticate with email and password, minting session tokens
    ///
    /// The outcome carries a user summary without the password hash.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        if !(not_empty(email) && not_empty(password)) {
            return Err(ValidationError::CredentialsRequired.into());
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self
            .credential_service
            .verify_password(password, &user.password_hash)?
        {
            warn!(
                email = %mask_email(email),
                event = "login_failed",
                "Login with wrong password"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.token_service.issue_pair(user.id, user.role)?;

        info!(
            email = %mask_email(email),
            user_id = %user.id,
            event = "login_success",
            "User logged in"
        );
        Ok(LoginOutcome {
            user: UserSummary::from(&user),
            tokens,
        })
    }

    /// Start a password reset by sending a reset OTP
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if !not_empty(email) {
            return Err(ValidationError::EmailRequired.into());
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(ValidationError::UnknownEmail)?;

        self.otp_service.check_restrictions(email).await?;
        self.otp_service.track_request(email).await?;
        self.otp_service
            .send_code(
                email,
                &DeliveryContext::new(user.name.clone(), MailTemplate::ForgotPassword),
            )
            .await?;

        info!(
            email = %mask_email(email),
            event = "forgot_password_otp_sent",
            "Password reset OTP sent"
        );
        Ok(())
    }

    /// Verify a forgot-password OTP
    pub async fn verify_forgot_password(&self, email: &str, code: &str) -> DomainResult<()> {
        if !(not_empty(email) && not_empty(code)) {
            return Err(ValidationError::EmailAndOtpRequired.into());
        }
        self.otp_service.verify_code(email, code).await
    }

    /// Replace the password after a verified reset
    ///
    /// The new password must differ from the stored one; equality is
    /// checked through the hash, never by keeping plaintext around.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !(not_empty(email) && not_empty(code) && not_empty(new_password)) {
            return Err(ValidationError::AllFieldsRequired.into());
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(ValidationError::UnknownEmail)?;

        if self
            .credential_service
            .verify_password(new_password, &user.password_hash)?
        {
            return Err(ValidationError::PasswordUnchanged.into());
        }

        let password_hash = self.credential_service.hash_password(new_password)?;
        self.user_repository
            .update_password(email, &password_hash)
            .await?;

        info!(
            email = %mask_email(email),
            event = "password_reset",
            "Password reset completed"
        );
        Ok(())
    }
}
