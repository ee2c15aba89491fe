//! Email module - SMTP notifier for OTP delivery

pub mod smtp_notifier;

pub use smtp_notifier::SmtpNotifier;
