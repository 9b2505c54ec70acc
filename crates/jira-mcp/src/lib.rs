//! # jira-mcp
//!
//! Exposes three Jira REST operations as MCP tools:
//!
//! - `jql_search` — `POST /rest/api/2/search`
//! - `get_issue` — `GET /rest/api/2/issue/{issueIdOrKey}`
//! - `log_work` — `POST /rest/api/2/issue/{issueIdOrKey}/worklog`
//!
//! Requests authenticate with Basic auth (`JIRA_USER_EMAIL` and
//! `JIRA_API_KEY`) against `JIRA_INSTANCE_URL`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod args;
pub mod config;
pub mod tools;

pub use config::{Cli, JiraConfig};
pub use tools::JiraTools;

/// Name reported in MCP server info.
pub const SERVER_NAME: &str = "jira-mcp";

/// Version reported in MCP server info.
pub const SERVER_VERSION: &str = "1.0.0";

/// Server metadata for the Jira adapter.
pub fn server_config() -> atlassian_mcp::ServerConfig {
    atlassian_mcp::ServerConfig::new(SERVER_NAME, SERVER_VERSION)
}
