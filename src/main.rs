use anyhow::Context;
use docnav_mcp::config::Config;
use docnav_mcp::server::NavServer;
use docnav_mcp::state::NavState;
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the MCP protocol
    docnav_mcp::tracing::init();

    tracing::info!("Starting docnav-mcp MCP server");

    let config = Config::load().context("Failed to load configuration")?;
    let state = NavState::from_config(config).context("Failed to prepare navigation state")?;

    // Create and serve the MCP server over stdio
    let server = NavServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
