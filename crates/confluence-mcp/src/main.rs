//! Confluence MCP Server
//!
//! Serves the Confluence tools over stdio. Exits non-zero before attaching
//! the transport when the token is missing.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use atlassian_mcp::AdapterServer;
use clap::Parser;
use confluence_mcp::{Cli, ConfluenceTools, server_config};

#[tokio::main]
async fn main() -> Result<()> {
    atlassian_mcp::logging::init("info");

    let config = Cli::parse().into_config()?;

    tracing::info!(base_url = %config.base_url, "starting {}", confluence_mcp::SERVER_NAME);

    let client = config.client()?;
    AdapterServer::new(ConfluenceTools::new(client), server_config())
        .serve_stdio()
        .await?;

    Ok(())
}
