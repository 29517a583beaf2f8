use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use crate::config::MailConfig;

use super::message::AlertMessage;

#[cfg(test)]
use mockall::automock;

/// Delivery seam between the decision flow and the outside world.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: AlertMessage) -> Result<()>;
}

/// Sends one plain-text message per alert over an authenticated STARTTLS
/// submission session.
pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: AlertMessage) -> Result<()> {
        if !self.config.is_complete() {
            // Logged skip, not a failure: the run still completes.
            error!("Missing email/SMTP configuration; cannot send alert");
            return Ok(());
        }

        let email = Message::builder()
            .from(self.config.from.parse().context("Invalid sender address")?)
            .to(self.config.to.parse().context("Invalid recipient address")?)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body)
            .context("Failed to build alert email")?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .context("Failed to configure SMTP transport")?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.user.clone(),
                self.config.pass.clone(),
            ))
            .timeout(Some(std::time::Duration::from_secs(30)))
            .build();

        transport
            .send(email)
            .await
            .context("Failed to send alert email")?;

        info!("Alert email sent to {}", self.config.to);

        Ok(())
    }
}
