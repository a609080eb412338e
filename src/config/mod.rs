use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub sendmail: SendmailConfig,
    #[serde(default)]
    pub centreon: CentreonConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How a built message is handed off to the mail system.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Submit through an external SMTP relay
    Smtp,
    /// Pipe into the local MTA binary
    Sendmail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_transport")]
    pub transport: TransportKind,
    /// Fixed sender address.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// When set, the sender is derived from the alert's host group alias as
    /// `centreon-<host group alias>@<sender_domain>` instead of `from_address`.
    /// Must match an allowed sender in the MTA configuration.
    pub sender_domain: Option<String>,
}

impl DeliveryConfig {
    /// Sender address for one notification.
    pub fn sender_for(&self, host_group_alias: &str) -> String {
        match &self.sender_domain {
            Some(domain) => format!("centreon-{}@{}", host_group_alias, domain),
            None => self.from_address.clone(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            from_address: default_from_address(),
            sender_domain: None,
        }
    }
}

fn default_transport() -> TransportKind {
    TransportKind::Smtp
}

fn default_from_address() -> String {
    "centreon@localhost".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Negotiate STARTTLS with the relay (plain connection when disabled)
    #[serde(default = "default_smtp_starttls")]
    pub starttls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            starttls: default_smtp_starttls(),
            username: None,
            password: None,
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_starttls() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendmailConfig {
    /// Path to the sendmail-compatible binary
    #[serde(default = "default_sendmail_command")]
    pub command: PathBuf,
    /// Arguments passed to the binary. `-t` takes the recipients from the
    /// message headers; `-oi` keeps a lone dot from terminating input.
    #[serde(default = "default_sendmail_args")]
    pub args: Vec<String>,
}

impl Default for SendmailConfig {
    fn default() -> Self {
        Self {
            command: default_sendmail_command(),
            args: default_sendmail_args(),
        }
    }
}

fn default_sendmail_command() -> PathBuf {
    PathBuf::from("/usr/sbin/sendmail")
}

fn default_sendmail_args() -> Vec<String> {
    vec!["-t".to_string(), "-oi".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct CentreonConfig {
    /// Base URL of the Centreon web UI, used for the host and service links
    /// in the email body
    #[serde(default)]
    pub url: String,
    /// Logo shown at the top of the email
    #[serde(default)]
    pub logo_url: String,
}

impl Default for CentreonConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            logo_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse configuration file")?;
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }

    pub fn default() -> Self {
        Self {
            delivery: DeliveryConfig::default(),
            smtp: SmtpConfig::default(),
            sendmail: SendmailConfig::default(),
            centreon: CentreonConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
