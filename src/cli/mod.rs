//! CLI module for the centreon-notify command-line interface.
//!
//! Centreon invokes this binary from a notification command, expanding its
//! macros into the flags of the `host` or `service` subcommand. Configure
//! under Configuration > Commands > Notifications:
//!
//! ```text
//! $USER1$/centreon-notify host --notify-type "$NOTIFICATIONTYPE$" \
//!     --host-name "$HOSTNAME$" --host-alias "$HOSTALIAS$" \
//!     --host-group-alias "$HOSTGROUPALIAS$" --host-state "$HOSTSTATE$" \
//!     --host-address "$HOSTADDRESS$" --host-output "$HOSTOUTPUT$" \
//!     --recipient-email "$CONTACTEMAIL$" --total-up "$TOTALHOSTSUP$" \
//!     --total-down "$TOTALHOSTSDOWN$" --duration "$HOSTDURATION$" \
//!     --date "$DATE$" --time "$TIME$"
//!
//! $USER1$/centreon-notify service --host-name "$HOSTNAME$" \
//!     --host-alias "$HOSTALIAS$" --host-address "$HOSTADDRESS$" \
//!     --service-desc "$SERVICEDESC$" --service-state "$SERVICESTATE$" \
//!     --service-output "$SERVICEOUTPUT$" --long-date-time "$LONGDATETIME$" \
//!     --service-duration "$SERVICEDURATION$" --contact-email "$CONTACTEMAIL$" \
//!     --total-warning "$TOTALSERVICESWARNING$" \
//!     --total-critical "$TOTALSERVICESCRITICAL$" \
//!     --total-unknown "$TOTALSERVICESUNKNOWN$" \
//!     --host-group-alias "$HOSTGROUPALIAS$"
//! ```
//!
//! Every alert flag is required; a missing flag is a usage error and nothing
//! is rendered or sent.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::alert::{HostAlert, ServiceAlert};
use crate::config::TransportKind;

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "centreon-notify")]
#[command(author, version, about = "HTML email notifications for Centreon alerts", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "centreon-notify.toml")]
    pub config: PathBuf,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Override the configured delivery transport
    #[arg(long, value_enum)]
    pub transport: Option<TransportKind>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a host state-change notification
    Host(HostAlert),

    /// Send a service state-change notification
    Service(ServiceAlert),
}
