//! Outbound email over SMTP.
//!
//! Credentials come from configuration (SMTP_USER / SMTP_PASS); the
//! transport is built per mailer, not per message.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// SMTP mailer for portal notifications.
pub struct Mailer {
    transport: SmtpTransport,
    from: String,
}

impl Mailer {
    /// Build a mailer from configuration. Fails when SMTP settings are
    /// incomplete.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| AppError::validation("SMTP_HOST is not set"))?;
        let user = config
            .smtp_user
            .clone()
            .ok_or_else(|| AppError::validation("SMTP_USER is not set"))?;
        let pass = config
            .smtp_pass()
            .map(str::to_owned)
            .ok_or_else(|| AppError::validation("SMTP_PASS is not set"))?;

        let transport = SmtpTransport::relay(host)
            .map_err(|e| AppError::internal(format!("SMTP relay: {}", e)))?
            .credentials(Credentials::new(user.clone(), pass))
            .build();

        let from = config.smtp_from.clone().unwrap_or(user);

        Ok(Self { transport, from })
    }

    /// Send a plain-text message.
    pub fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::internal(format!("Bad from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::validation(format!("Bad recipient address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Build message: {}", e)))?;

        self.transport
            .send(&message)
            .map_err(|e| AppError::internal(format!("SMTP send: {}", e)))?;

        tracing::info!(to, subject, "Email sent");
        Ok(())
    }

    /// Send the connectivity-check message used by `ops test-email`.
    pub fn send_test(&self, to: &str) -> AppResult<()> {
        self.send(
            to,
            "Student Hub SMTP check",
            "This is a test message confirming the SMTP configuration works.",
        )
    }
}
