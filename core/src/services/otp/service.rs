//! OTP lifecycle manager implementation.
//!
//! State lives entirely in the lockout state store under these keys:
//! - `otp:{email}` - the live code (TTL 300s, one per email)
//! - `otp_cooldown:{email}` - blocks new requests (TTL 60s)
//! - `otp_request_count:{email}` - rolling hour request counter
//! - `otp_spam_lock:{email}` - trips after too many requests (TTL 3600s)
//! - `otp_attempts:{email}` - wrong-submission counter (TTL 300s)
//! - `otp_lock:{email}` - trips after too many wrong submissions (TTL 1800s)

use std::sync::Arc;

use bz_shared::config::otp::OtpConfig;
use bz_shared::utils::validation::mask_email;
use tracing::{info, warn};

use crate::domain::entities::otp_code::OtpCode;
use crate::errors::{DomainError, DomainResult, OtpError};

use super::traits::{NotifierTrait, OtpStoreTrait};
use super::types::DeliveryContext;

/// OTP lifecycle manager
///
/// Generates and delivers one-time codes, enforces the cooldown/spam/lock
/// policy, and verifies submitted codes with failed-attempt tracking. All
/// shared state is in the injected store; the manager itself is stateless
/// and safe to share across request handlers.
pub struct OtpService<N: NotifierTrait, S: OtpStoreTrait> {
    /// Notifier for out-of-band code delivery
    notifier: Arc<N>,
    /// Lockout state store
    store: Arc<S>,
    /// Timing and threshold policy
    config: OtpConfig,
}

impl<N: NotifierTrait, S: OtpStoreTrait> OtpService<N, S> {
    /// Create a new OTP lifecycle manager
    pub fn new(notifier: Arc<N>, store: Arc<S>, config: OtpConfig) -> Self {
        Self {
            notifier,
            store,
            config,
        }
    }

    /// Check whether any restriction currently blocks OTP issuance
    ///
    /// Reads the cooldown marker, the account lock, and the spam lock in
    /// that priority order and fails on the first one present. Pure read,
    /// no side effects.
    pub async fn check_restrictions(&self, email: &str) -> DomainResult<()> {
        if self.read(&Self::cooldown_key(email)).await?.is_some() {
            warn!(
                email = %mask_email(email),
                event = "otp_cooldown_hit",
                "OTP request rejected: cooldown active"
            );
            return Err(OtpError::Cooldown.into());
        }

        if self.read(&Self::lock_key(email)).await?.is_some() {
            warn!(
                email = %mask_email(email),
                event = "otp_account_locked",
                "OTP request rejected: account locked"
            );
            return Err(OtpError::AccountLocked.into());
        }

        if self.read(&Self::spam_lock_key(email)).await?.is_some() {
            warn!(
                email = %mask_email(email),
                event = "otp_spam_locked",
                "OTP request rejected: spam lock active"
            );
            return Err(OtpError::SpamLocked.into());
        }

        Ok(())
    }

    /// Record an OTP request against the rolling hour window
    ///
    /// The counter mutation is a single atomic increment-and-get; when the
    /// new count exceeds the window limit (the 3rd request), the spam lock
    /// is set and the request fails.
    pub async fn track_request(&self, email: &str) -> DomainResult<()> {
        let count = self
            .store
            .incr_and_get(
                &Self::request_count_key(email),
                self.config.request_window_seconds,
            )
            .await
            .map_err(|e| self.store_failure(e))?;

        if count > self.config.request_window_limit {
            self.store
                .set_with_ttl(
                    &Self::spam_lock_key(email),
                    "locked",
                    self.config.spam_lock_seconds,
                )
                .await
                .map_err(|e| self.store_failure(e))?;
            warn!(
                email = %mask_email(email),
                requests_in_window = count,
                event = "otp_spam_lock_set",
                "Too many OTP requests in window, spam lock set"
            );
            return Err(OtpError::SpamLocked.into());
        }

        Ok(())
    }

    /// Generate a code, deliver it, and record the OTP state
    ///
    /// Delivery happens before any marker is written: a delivery failure or
    /// timeout surfaces as `DeliveryFailure` and leaves no cooldown or OTP
    /// record behind, so a crash mid-flow can only cost the user a usable
    /// code, never a false restriction.
    pub async fn send_code(&self, email: &str, context: &DeliveryContext) -> DomainResult<()> {
        let otp = OtpCode::generate(email, self.config.code_ttl_seconds);

        let data = serde_json::json!({
            "name": context.recipient_name,
            "otp": otp.code,
        });

        self.notifier
            .deliver(
                email,
                context.template.subject(),
                context.template.file_name(),
                &data,
            )
            .await
            .map_err(|e| {
                warn!(
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver OTP email"
                );
                DomainError::Otp(OtpError::DeliveryFailure)
            })?;

        self.store
            .set_with_ttl(&Self::code_key(email), &otp.code, self.config.code_ttl_seconds)
            .await
            .map_err(|e| self.store_failure(e))?;
        self.store
            .set_with_ttl(
                &Self::cooldown_key(email),
                "true",
                self.config.cooldown_seconds,
            )
            .await
            .map_err(|e| self.store_failure(e))?;

        info!(
            email = %mask_email(email),
            template = context.template.file_name(),
            event = "otp_issued",
            "OTP issued and delivered"
        );

        Ok(())
    }

    /// Verify a submitted code
    ///
    /// The account lock is checked before any comparison, so a locked
    /// account always reports the lock even when the submitted code would
    /// have matched. On a match the code and its failed-attempt counter are
    /// deleted together, making every code single-use.
    pub async fn verify_code(&self, email: &str, submitted: &str) -> DomainResult<()> {
        let code_key = Self::code_key(email);
        let attempts_key = Self::attempts_key(email);

        if self.read(&Self::lock_key(email)).await?.is_some() {
            warn!(
                email = %mask_email(email),
                event = "otp_verify_while_locked",
                "Verification attempt on locked account"
            );
            return Err(OtpError::AccountLocked.into());
        }

        let stored = self.read(&code_key).await?;
        if stored.as_deref() == Some(submitted) {
            self.store
                .delete(&[code_key.as_str(), attempts_key.as_str()])
                .await
                .map_err(|e| self.store_failure(e))?;
            info!(
                email = %mask_email(email),
                event = "otp_verified",
                "OTP verified"
            );
            return Ok(());
        }

        // Wrong or expired code: count the attempt atomically
        let attempts = self
            .store
            .incr_and_get(&attempts_key, self.config.attempts_ttl_seconds)
            .await
            .map_err(|e| self.store_failure(e))?;

        if attempts > self.config.max_failed_attempts {
            self.store
                .set_with_ttl(
                    &Self::lock_key(email),
                    "locked",
                    self.config.account_lock_seconds,
                )
                .await
                .map_err(|e| self.store_failure(e))?;
            self.store
                .delete(&[code_key.as_str(), attempts_key.as_str()])
                .await
                .map_err(|e| self.store_failure(e))?;
            warn!(
                email = %mask_email(email),
                failed_attempts = attempts,
                event = "otp_account_lock_set",
                "Too many failed OTP attempts, account locked"
            );
            return Err(OtpError::AccountLocked.into());
        }

        let attempts_remaining = self.config.max_failed_attempts + 1 - attempts;
        warn!(
            email = %mask_email(email),
            attempts_remaining,
            event = "otp_verify_failed",
            "Wrong or expired OTP submitted"
        );
        Err(OtpError::InvalidOrExpired { attempts_remaining }.into())
    }

    async fn read(&self, key: &str) -> DomainResult<Option<String>> {
        self.store.get(key).await.map_err(|e| self.store_failure(e))
    }

    fn store_failure(&self, error: String) -> DomainError {
        tracing::error!(error = %error, "Lockout state store operation failed");
        DomainError::ServiceUnavailable {
            service: "lockout state store".to_string(),
        }
    }

    fn code_key(email: &str) -> String {
        format!("otp:{}", email)
    }

    fn cooldown_key(email: &str) -> String {
        format!("otp_cooldown:{}", email)
    }

    fn request_count_key(email: &str) -> String {
        format!("otp_request_count:{}", email)
    }

    fn spam_lock_key(email: &str) -> String {
        format!("otp_spam_lock:{}", email)
    }

    fn attempts_key(email: &str) -> String {
        format!("otp_attempts:{}", email)
    }

    fn lock_key(email: &str) -> String {
        format!("otp_lock:{}", email)
    }
}
