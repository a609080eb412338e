//! Mail delivery strategies.
//!
//! Rendering produces one [`lettre::Message`]; every transport consumes that
//! same prebuilt message, so the subject and body bytes are identical
//! whichever strategy carries them.

pub mod sendmail;
pub mod smtp;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::Message;
use thiserror::Error;

use crate::config::{Config, TransportKind};
use crate::render::RenderedMessage;

/// Failures while building or handing off a message. Every variant is
/// terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to pipe message into {command}: {source}")]
    Pipe {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    MtaStatus {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// A delivery strategy for a fully built mail message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), TransportError>;
}

/// Select the delivery strategy for this invocation.
pub fn from_config(kind: TransportKind, config: &Config) -> Box<dyn MailTransport> {
    match kind {
        TransportKind::Smtp => Box::new(smtp::SmtpRelay::new(config.smtp.clone())),
        TransportKind::Sendmail => Box::new(sendmail::Sendmail::new(config.sendmail.clone())),
    }
}

/// Build the outgoing message: `multipart/alternative` with the plain-text
/// and HTML renderings.
pub fn build_message(
    rendered: &RenderedMessage,
    from: &str,
    to: &str,
) -> Result<Message, TransportError> {
    let from: Mailbox = from.parse()?;
    let to: Mailbox = to.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(rendered.subject.clone())
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(rendered.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(rendered.html_body.clone()),
                ),
        )?;

    Ok(message)
}

/// Deliver the message, logging the outcome. A failure is reported and
/// swallowed, never retried or propagated. Returns whether delivery
/// succeeded.
pub async fn dispatch(
    mailer: &dyn MailTransport,
    message: Message,
    to: &str,
    subject: &str,
) -> bool {
    match mailer.send(message).await {
        Ok(()) => {
            tracing::info!(
                to = %to,
                subject = %subject,
                "Notification email sent"
            );
            true
        }
        Err(e) => {
            tracing::error!(
                to = %to,
                subject = %subject,
                error = %e,
                "Failed to send notification email"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rendered() -> RenderedMessage {
        RenderedMessage {
            subject: "Host web01 status is DOWN".to_string(),
            html_body: "<html><body>web01 is DOWN</body></html>".to_string(),
            text_body: "web01 is DOWN".to_string(),
        }
    }

    /// In-memory transport that records calls and optionally fails.
    struct RecordingTransport {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingTransport {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, _message: Message) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TransportError::Spawn {
                    command: "/usr/sbin/sendmail".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_build_message_valid_addresses() {
        let message = build_message(&rendered(), "centreon@example.com", "oncall@example.com")
            .expect("message should build");

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Host web01 status is DOWN"));
        assert!(raw.contains("From: centreon@example.com"));
        assert!(raw.contains("To: oncall@example.com"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_message_rejects_invalid_recipient() {
        let result = build_message(&rendered(), "centreon@example.com", "not-an-address");
        assert!(matches!(result, Err(TransportError::Address(_))));
    }

    #[tokio::test]
    async fn test_dispatch_calls_transport_once() {
        let transport = RecordingTransport::new(false);
        let message =
            build_message(&rendered(), "centreon@example.com", "oncall@example.com").unwrap();

        let sent = dispatch(
            &transport,
            message,
            "oncall@example.com",
            "Host web01 status is DOWN",
        )
        .await;

        assert!(sent);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_reports_failure_without_propagating() {
        let transport = RecordingTransport::new(true);
        let message =
            build_message(&rendered(), "centreon@example.com", "oncall@example.com").unwrap();

        let sent = dispatch(
            &transport,
            message,
            "oncall@example.com",
            "Host web01 status is DOWN",
        )
        .await;

        assert!(!sent);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}
