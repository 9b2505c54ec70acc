//! # confluence-mcp
//!
//! Exposes three Confluence REST operations as MCP tools:
//!
//! - `confluence.search` — `GET {base}/content/search`
//! - `confluence.getPage` — `GET {base}/content/{id}`
//! - `confluence.createPage` — `POST {base}/content`
//!
//! Requests authenticate with a personal access token (`CONFLUENCE_PAT`)
//! sent as a Bearer token.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod args;
pub mod config;
pub mod tools;

pub use config::{Cli, ConfluenceConfig};
pub use tools::ConfluenceTools;

/// Name reported in MCP server info.
pub const SERVER_NAME: &str = "Confluence MCP";

/// Version reported in MCP server info.
pub const SERVER_VERSION: &str = "0.1.0";

/// Server metadata for the Confluence adapter.
pub fn server_config() -> atlassian_mcp::ServerConfig {
    atlassian_mcp::ServerConfig::new(SERVER_NAME, SERVER_VERSION)
}
