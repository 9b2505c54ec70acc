//! Jira MCP Server
//!
//! Serves the Jira tools over stdio. Exits non-zero before attaching the
//! transport when configuration is missing.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use atlassian_mcp::AdapterServer;
use clap::Parser;
use jira_mcp::{Cli, JiraTools, server_config};

#[tokio::main]
async fn main() -> Result<()> {
    atlassian_mcp::logging::init("info");

    let config = Cli::parse().into_config()?;

    tracing::info!(
        instance_url = %config.instance_url,
        user = %config.user_email,
        "starting {}",
        jira_mcp::SERVER_NAME
    );

    let client = config.client()?;
    AdapterServer::new(JiraTools::new(client), server_config())
        .serve_stdio()
        .await?;

    Ok(())
}
