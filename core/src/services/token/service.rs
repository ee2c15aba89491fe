//! Session token issuer implementation.

use bz_shared::config::auth::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, CookieSpec, TokenKind, TokenPair, JWT_ISSUER};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult, TokenError};

/// Service for minting and verifying the session token pair
///
/// Access and refresh tokens are signed with distinct secrets, so a
/// compromise of one secret does not compromise tokens of the other kind.
pub struct TokenService {
    config: AuthConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the auth configuration
    pub fn new(config: AuthConfig) -> Self {
        let access_encoding = EncodingKey::from_secret(config.access_token_secret.as_bytes());
        let access_decoding = DecodingKey::from_secret(config.access_token_secret.as_bytes());
        let refresh_encoding = EncodingKey::from_secret(config.refresh_token_secret.as_bytes());
        let refresh_decoding = DecodingKey::from_secret(config.refresh_token_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            access_encoding,
            access_decoding,
            refresh_encoding,
            refresh_decoding,
            validation,
        }
    }

    /// Mints a signed access/refresh token pair for a user
    pub fn issue_pair(&self, user_id: Uuid, role: Role) -> DomainResult<TokenPair> {
        let access_claims =
            Claims::with_expiry(user_id, role, self.access_expiry_seconds());
        let refresh_claims =
            Claims::with_expiry(user_id, role, self.refresh_expiry_seconds());

        let access_token = self.encode(&access_claims, &self.access_encoding)?;
        let refresh_token = self.encode(&refresh_claims, &self.refresh_encoding)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        self.decode(token, &self.access_decoding)
    }

    /// Verifies a refresh token and returns its claims
    pub fn verify_refresh(&self, token: &str) -> DomainResult<Claims> {
        self.decode(token, &self.refresh_decoding)
    }

    /// Cookie attributes for transporting a token of the given kind
    ///
    /// Both cookies are httpOnly, Secure, and SameSite=None; the max-age
    /// matches the token's actual expiry (15 minutes for access, 7 days
    /// for refresh).
    pub fn cookie_spec(&self, kind: TokenKind) -> CookieSpec {
        let max_age_seconds = match kind {
            TokenKind::Access => self.access_expiry_seconds(),
            TokenKind::Refresh => self.refresh_expiry_seconds(),
        };
        CookieSpec {
            name: kind.cookie_name(),
            http_only: true,
            secure: true,
            same_site_none: true,
            max_age_seconds,
        }
    }

    fn access_expiry_seconds(&self) -> i64 {
        self.config.access_expiry_minutes * 60
    }

    fn refresh_expiry_seconds(&self) -> i64 {
        self.config.refresh_expiry_days * 24 * 60 * 60
    }

    fn encode(&self, claims: &Claims, key: &EncodingKey) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode(&self, token: &str, key: &DecodingKey) -> DomainResult<Claims> {
        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })
    }
}
