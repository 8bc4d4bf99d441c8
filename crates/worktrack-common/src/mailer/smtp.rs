//! SMTP transport built on lettre
//!
//! Credentials and the default sender come from an injected `SmtpConfig`,
//! never from ambient process state at send time.

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpConfig;

/// Mailer errors
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Asynchronous SMTP mailer
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").field("from", &self.from).finish()
    }
}

impl Mailer {
    /// Create a mailer from SMTP configuration
    ///
    /// # Errors
    /// Returns an error if the relay host or sender address is invalid
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(creds)
            .build();

        let from = config.from.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    /// Send an HTML email with a plain-text alternative
    ///
    /// # Errors
    /// Returns an error if the recipient address is invalid or delivery fails
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html: String,
        text: String,
    ) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text, html))?;

        self.transport.send(message).await?;

        tracing::debug!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer".to_string(),
            password: "secret".to_string(),
            from: "no-reply@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mailer_construction() {
        let mailer = Mailer::new(&test_config()).unwrap();
        assert_eq!(mailer.from.email.to_string(), "no-reply@example.com");
    }

    #[tokio::test]
    async fn test_mailer_rejects_bad_sender() {
        let mut config = test_config();
        config.from = "not an address".to_string();
        assert!(Mailer::new(&config).is_err());
    }
}
