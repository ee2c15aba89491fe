//! Types for OTP delivery.

/// Mail template used when delivering a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    /// Sent while registering a new account
    UserActivation,
    /// Sent for the forgot-password flow
    ForgotPassword,
}

impl MailTemplate {
    /// Template file name, without extension
    pub fn file_name(&self) -> &'static str {
        match self {
            MailTemplate::UserActivation => "user-activation-mail",
            MailTemplate::ForgotPassword => "forgot-password-user-mail",
        }
    }

    /// Subject line for the outgoing message
    pub fn subject(&self) -> &'static str {
        match self {
            MailTemplate::UserActivation => "Verify Your Email - OTP Code",
            MailTemplate::ForgotPassword => "Reset Your Password - OTP Code",
        }
    }
}

/// Context the caller supplies for code delivery
#[derive(Debug, Clone)]
pub struct DeliveryContext {
    /// Recipient display name, substituted into the template
    pub recipient_name: String,

    /// Which template to render
    pub template: MailTemplate,
}

impl DeliveryContext {
    pub fn new(recipient_name: impl Into<String>, template: MailTemplate) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            template,
        }
    }
}
