//! SMTP email delivery configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// SMTP transport configuration for the email notifier
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP port
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// From address used on outgoing mail
    pub from_address: String,

    /// Directory holding HTML mail templates
    pub template_dir: String,

    /// Delivery timeout in milliseconds
    pub delivery_timeout_ms: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@bazario.dev"),
            template_dir: String::from("templates"),
            delivery_timeout_ms: 5000,
        }
    }
}

impl SmtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env_or("SMTP_HOST", "localhost"),
            port: env_parse("SMTP_PORT", 587),
            username: env_or("SMTP_USER", ""),
            password: env_or("SMTP_PASSWORD", ""),
            from_address: env_or("SMTP_FROM", "no-reply@bazario.dev"),
            template_dir: env_or("MAIL_TEMPLATE_DIR", "templates"),
            delivery_timeout_ms: env_parse("SMTP_DELIVERY_TIMEOUT_MS", 5000),
        }
    }
}
