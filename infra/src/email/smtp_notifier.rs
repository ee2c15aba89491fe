//! SMTP notifier implementation.
//!
//! Renders an HTML template by name, substitutes `{{key}}` placeholders
//! from the delivery data, and sends through an async SMTP transport. Every
//! send is bounded by the configured delivery timeout; a timeout or
//! transport failure crosses the trait boundary as an error string the core
//! treats as a delivery failure.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::time::timeout;
use tracing::{debug, warn};

use bz_core::services::otp::NotifierTrait;
use bz_shared::config::email::SmtpConfig;

use crate::InfrastructureError;

/// SMTP implementation of the core's notifier trait
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    template_dir: PathBuf,
    delivery_timeout: Duration,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            mailer: builder.build(),
            from_address: config.from_address.clone(),
            template_dir: PathBuf::from(&config.template_dir),
            delivery_timeout: Duration::from_millis(config.delivery_timeout_ms),
        })
    }

    /// Load a template file and substitute `{{key}}` placeholders
    async fn render(&self, template: &str, data: &serde_json::Value) -> Result<String, String> {
        let path = self.template_dir.join(format!("{}.html", template));
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("failed to load template {}: {}", path.display(), e))?;
        Ok(render_template(&body, data))
    }
}

#[async_trait]
impl NotifierTrait for SmtpNotifier {
    async fn deliver(
        &self,
        to: &str,
        subject: &str,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<(), String> {
        let body = self.render(template, data).await?;

        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| format!("invalid from address: {}", e))?,
            )
            .to(to.parse().map_err(|e| format!("invalid recipient: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| format!("failed to build message: {}", e))?;

        debug!(template, "Sending mail");

        match timeout(self.delivery_timeout, self.mailer.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                warn!(error = %e, "SMTP send failed");
                Err(format!("smtp send failed: {}", e))
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.delivery_timeout.as_millis() as u64,
                    "SMTP send timed out"
                );
                Err("smtp send timed out".to_string())
            }
        }
    }
}

/// Substitute `{{key}}` placeholders with string values from `data`
fn render_template(template: &str, data: &serde_json::Value) -> String {
    let mut body = template.to_string();
    if let Some(map) = data.as_object() {
        for (key, value) in map {
            let placeholder = format!("{{{{{}}}}}", key);
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            body = body.replace(&placeholder, &replacement);
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::render_template;

    #[test]
    fn substitutes_string_placeholders() {
        let rendered = render_template(
            "<p>Hi {{name}}, your code is {{otp}}</p>",
            &serde_json::json!({"name": "A", "otp": "1234"}),
        );
        assert_eq!(rendered, "<p>Hi A, your code is 1234</p>");
    }

    #[test]
    fn leaves_unknown_placeholders_in_place() {
        let rendered = render_template("{{name}} {{missing}}", &serde_json::json!({"name": "A"}));
        assert_eq!(rendered, "A {{missing}}");
    }

    #[test]
    fn renders_non_string_values() {
        let rendered = render_template("count: {{count}}", &serde_json::json!({"count": 3}));
        assert_eq!(rendered, "count: 3");
    }
}
