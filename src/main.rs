//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It initializes logging,
//! loads configuration, and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use maps_mcp_server::core::{Config, McpServer, TransportService};
use maps_mcp_server::domains::maps::probe;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server; a missing API key is fatal here
    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    validate_credentials(&server);

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Fire a one-shot geocode probe against the provider at startup.
///
/// A failing probe is logged but does not stop the server, so a transient
/// provider outage or quota rejection never blocks an otherwise valid start.
fn validate_credentials(server: &McpServer) {
    let ctx = server.maps_context().clone();

    // The blocking HTTP client cannot run inside the async runtime
    let report = std::thread::spawn(move || ctx.client().map(|client| probe(client)))
        .join()
        .ok()
        .and_then(|r| r.ok());

    match report {
        Some(report) if report.ok => info!("{}", report.status_line()),
        Some(report) => warn!("Credential validation failed: {}", report.status_line()),
        None => warn!("Credential validation skipped: maps client unavailable"),
    }
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format. Logs go to
/// stderr so the STDIO transport keeps stdout for the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
