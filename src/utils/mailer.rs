//! Outbound mail behind a narrow trait.
//!
//! The SMTP transport is the production implementation; when no relay is
//! configured the log implementation is used so development setups keep
//! working without a mail server.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{EscolaError, Result};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();
        let mail = &config.mail;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.smtp_host)
            .map_err(|e| EscolaError::mail_delivery(format!("SMTP relay setup failed: {e}")))?
            .port(mail.smtp_port);

        if !mail.smtp_username.is_empty() {
            builder = builder.credentials(Credentials::new(
                mail.smtp_username.clone(),
                mail.smtp_password.clone(),
            ));
        }

        let from = mail
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| EscolaError::mail_delivery(format!("Invalid from address: {e}")))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| EscolaError::mail_delivery(format!("Invalid recipient: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| EscolaError::mail_delivery(format!("Message build failed: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EscolaError::mail_delivery(e.to_string()))?;
        Ok(())
    }
}

/// Logs instead of sending. Active when `mail.smtp_host` is empty.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        tracing::warn!("Mail transport unconfigured, logging message instead");
        tracing::info!("To: {} | Subject: {} | Body: {}", to, subject, body);
        Ok(())
    }
}

/// Picks the transport from configuration.
pub fn create_mailer() -> Arc<dyn Mailer> {
    let config = AppConfig::get();
    if config.mail.smtp_host.is_empty() {
        return Arc::new(LogMailer);
    }
    match SmtpMailer::new() {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            tracing::error!("SMTP mailer setup failed, falling back to log: {}", e);
            Arc::new(LogMailer)
        }
    }
}
