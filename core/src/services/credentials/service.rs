//! Credential verifier implementation.

use bz_shared::utils::validation::{is_valid_email, not_empty};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult, ValidationError};

/// Registration payload as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,

    /// Required for seller registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Required for seller registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Credential verifier
///
/// Validates registration payload shape and hashes/verifies passwords with
/// bcrypt. The cost factor is adaptive; the default is tuned so a verify
/// takes on the order of 100ms on current hardware.
#[derive(Debug, Clone)]
pub struct CredentialService {
    cost: u32,
}

impl Default for CredentialService {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the bcrypt cost factor (tests use a low cost)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Validate a registration payload for the given role
    ///
    /// All roles need a non-empty name, email, and password; sellers
    /// additionally need a phone number and a country. Pure validation,
    /// no I/O.
    pub fn validate_registration(data: &RegistrationData, role: Role) -> DomainResult<()> {
        let base_ok = not_empty(&data.name) && not_empty(&data.email) && not_empty(&data.password);
        let seller_ok = role != Role::Seller
            || (data.phone_number.as_deref().is_some_and(not_empty)
                && data.country.as_deref().is_some_and(not_empty));

        if !base_ok || !seller_ok {
            return Err(DomainError::Validation(ValidationError::MissingFields {
                role: role.as_str().to_string(),
            }));
        }

        if !is_valid_email(&data.email) {
            return Err(DomainError::Validation(ValidationError::InvalidEmail));
        }

        Ok(())
    }

    /// Hash a plaintext password
    ///
    /// The plaintext is never logged or persisted.
    pub fn hash_password(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Compare a plaintext password against a stored hash
    pub fn verify_password(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
