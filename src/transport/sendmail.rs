//! Local MTA delivery.

use std::process::Stdio;

use async_trait::async_trait;
use lettre::Message;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{MailTransport, TransportError};
use crate::config::SendmailConfig;

/// Pipes the formatted message into the local sendmail binary.
pub struct Sendmail {
    config: SendmailConfig,
}

impl Sendmail {
    pub fn new(config: SendmailConfig) -> Self {
        Self { config }
    }

    fn command_name(&self) -> String {
        self.config.command.display().to_string()
    }
}

#[async_trait]
impl MailTransport for Sendmail {
    async fn send(&self, message: Message) -> Result<(), TransportError> {
        let raw = message.formatted();

        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| TransportError::Spawn {
                command: self.command_name(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&raw)
                .await
                .map_err(|source| TransportError::Pipe {
                    command: self.command_name(),
                    source,
                })?;
            // Dropping the handle closes the pipe so the MTA sees EOF.
        }

        let status = child.wait().await.map_err(|source| TransportError::Pipe {
            command: self.command_name(),
            source,
        })?;

        if !status.success() {
            return Err(TransportError::MtaStatus {
                command: self.command_name(),
                status,
            });
        }

        Ok(())
    }
}
