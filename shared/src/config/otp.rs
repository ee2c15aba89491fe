//! OTP lifecycle configuration module

use serde::{Deserialize, Serialize};

/// Timing and threshold policy for the OTP lifecycle manager
///
/// The thresholds encode a uniform 3-strikes policy: a counter value of 2
/// means the 3rd offense trips the corresponding lock.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// OTP record lifetime in seconds
    pub code_ttl_seconds: u64,

    /// Minimum wait between consecutive OTP requests in seconds
    pub cooldown_seconds: u64,

    /// Request-count window length in seconds
    pub request_window_seconds: u64,

    /// Requests allowed inside one window before the spam lock trips
    pub request_window_limit: i64,

    /// Spam lock duration in seconds
    pub spam_lock_seconds: u64,

    /// Wrong submissions allowed before the account lock trips
    pub max_failed_attempts: i64,

    /// Failed-attempt counter lifetime in seconds
    pub attempts_ttl_seconds: u64,

    /// Account lock duration in seconds
    pub account_lock_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,
            cooldown_seconds: 60,
            request_window_seconds: 3600,
            request_window_limit: 2,
            spam_lock_seconds: 3600,
            max_failed_attempts: 2,
            attempts_ttl_seconds: 300,
            account_lock_seconds: 1800,
        }
    }
}
