use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centreon_notify::cli::{Cli, Commands};
use centreon_notify::config::Config;
use centreon_notify::{render, transport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)?;

    // Initialize logging
    let log_level = cli
        .log_level
        .as_ref()
        .unwrap_or(&config.logging.level)
        .clone();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("centreon-notify v{}", env!("CARGO_PKG_VERSION"));

    let kind = cli.transport.unwrap_or(config.delivery.transport);

    let (rendered, from, to) = match &cli.command {
        Commands::Host(alert) => (
            render::render_host(alert, &config.centreon),
            config.delivery.sender_for(&alert.host_group_alias),
            alert.recipient_email.clone(),
        ),
        Commands::Service(alert) => (
            render::render_service(alert, &config.centreon),
            config.delivery.sender_for(&alert.host_group_alias),
            alert.contact_email.clone(),
        ),
    };

    // Address or build problems abort before any transport exists.
    let message = transport::build_message(&rendered, &from, &to)?;
    let mailer = transport::from_config(kind, &config);

    tracing::debug!(transport = ?kind, from = %from, "Dispatching notification");

    // Delivery failure is terminal for this invocation and logged inside
    // dispatch; the process still exits 0 once the attempt was made.
    transport::dispatch(mailer.as_ref(), message, &to, &rendered.subject).await;

    Ok(())
}
