//! SMTP relay delivery.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailTransport, TransportError};
use crate::config::SmtpConfig;

/// Submits through an external mail relay, authenticating when credentials
/// are configured.
pub struct SmtpRelay {
    config: SmtpConfig,
}

impl SmtpRelay {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn mailer(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, TransportError> {
        let builder = if self.config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
        }
        .port(self.config.port);

        let builder = if let (Some(username), Some(password)) =
            (&self.config.username, &self.config.password)
        {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        Ok(builder.build())
    }
}

#[async_trait]
impl MailTransport for SmtpRelay {
    async fn send(&self, message: Message) -> Result<(), TransportError> {
        self.mailer()?.send(message).await?;
        Ok(())
    }
}
