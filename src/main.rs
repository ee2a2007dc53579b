//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the server and runs it
//! on the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use news_notes_mcp_server::core::{Config, LoggingConfig, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // `.env` has to be loaded before the log level is read
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env());

    let config = Config::from_env();

    info!(
        "Starting {} v{} (services: {:?})",
        config.server.name, config.server.version, config.services.selection
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config).context("Failed to initialize MCP server")?;
    info!("{} tools registered, transport: {}", server.list_tools().len(), transport.kind());

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured on top of the configured level. Logs
/// go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let level: Level = logging.level.parse().unwrap_or(Level::INFO);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
