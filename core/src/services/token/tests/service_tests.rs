use bz_shared::config::auth::AuthConfig;
use uuid::Uuid;

use crate::domain::entities::token::TokenKind;
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenService;

fn test_config() -> AuthConfig {
    AuthConfig {
        access_token_secret: "access-secret-for-tests".to_string(),
        refresh_token_secret: "refresh-secret-for-tests".to_string(),
        access_expiry_minutes: 15,
        refresh_expiry_days: 7,
    }
}

#[test]
fn issued_pair_carries_subject_and_role() {
    let service = TokenService::new(test_config());
    let user_id = Uuid::new_v4();

    let pair = service.issue_pair(user_id, Role::User).unwrap();

    let access = service.verify_access(&pair.access_token).unwrap();
    assert_eq!(access.user_id(), Some(user_id));
    assert_eq!(access.role, "user");

    let refresh = service.verify_refresh(&pair.refresh_token).unwrap();
    assert_eq!(refresh.user_id(), Some(user_id));
    assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
}

#[test]
fn tokens_are_signed_with_distinct_secrets() {
    let service = TokenService::new(test_config());
    let pair = service.issue_pair(Uuid::new_v4(), Role::Seller).unwrap();

    // An access token must not validate as a refresh token and vice versa
    let err = service.verify_refresh(&pair.access_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));

    let err = service.verify_access(&pair.refresh_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn tampered_token_is_rejected() {
    let service = TokenService::new(test_config());
    let pair = service.issue_pair(Uuid::new_v4(), Role::User).unwrap();

    let mut tampered = pair.access_token.clone();
    tampered.pop();
    tampered.push('x');
    assert!(service.verify_access(&tampered).is_err());
}

#[test]
fn expired_access_token_reports_expiry() {
    let config = AuthConfig {
        // jsonwebtoken applies a default 60s leeway; go past it
        access_expiry_minutes: -2,
        ..test_config()
    };
    let service = TokenService::new(config);
    let pair = service.issue_pair(Uuid::new_v4(), Role::User).unwrap();

    let err = service.verify_access(&pair.access_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn cookie_specs_match_token_lifetimes() {
    let service = TokenService::new(test_config());

    let access = service.cookie_spec(TokenKind::Access);
    assert_eq!(access.name, "access_token");
    assert!(access.http_only);
    assert!(access.secure);
    assert!(access.same_site_none);
    assert_eq!(access.max_age_seconds, 15 * 60);

    let refresh = service.cookie_spec(TokenKind::Refresh);
    assert_eq!(refresh.name, "refresh_token");
    assert_eq!(refresh.max_age_seconds, 7 * 24 * 60 * 60);

    // The access cookie expires with its token instead of inheriting the
    // refresh cookie's week-long max-age.
    assert!(access.max_age_seconds < refresh.max_age_seconds);
}
