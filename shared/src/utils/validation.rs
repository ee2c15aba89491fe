//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard email address syntax: local part, `@`, domain with a dot.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

/// Check if an email address matches the standard address syntax
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a string contains a non-whitespace value
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain, so
/// log lines stay correlatable without exposing the address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let head = local.chars().next().unwrap();
            format!("{}***@{}", head, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn masks_local_part() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn not_empty_trims_whitespace() {
        assert!(not_empty("a"));
        assert!(!not_empty("   "));
        assert!(!not_empty(""));
    }
}
