//! OTP lifecycle module
//!
//! This module owns the complete one-time-code workflow:
//! - restriction checks (cooldown, account lock, spam lock)
//! - request tracking with a rolling hour window
//! - code generation and delivery through the notifier
//! - code verification with failed-attempt tracking and lockout

pub mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::OtpService;
pub use traits::{NotifierTrait, OtpStoreTrait};
pub use types::{DeliveryContext, MailTemplate};
