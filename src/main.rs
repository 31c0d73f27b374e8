use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use dashboard_api::config::load_config;
use dashboard_api::lifecycle::{signals, Shutdown};
use dashboard_api::observability::logging;
use dashboard_api::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "dashboard-api", version, about = "Dashboard backend API service")]
struct Cli {
    /// Path to a TOML configuration file. Environment variables override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    logging::init(&config);

    tracing::info!(
        environment = ?config.environment,
        bind_address = %config.server.bind_address(),
        api_prefix = %config.server.api_prefix,
        "Configuration loaded"
    );

    // Lazy pool: the service starts even when the datastore is down and the
    // health surface reports it as such.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(config.database.probe_timeout_secs))
        .connect_lazy(&config.database.url)?;

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let server = HttpServer::new(config, pool);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
