//! Core MCP server infrastructure for the Atlassian adapters.
//!
//! This crate provides the pieces both adapter binaries share: the tool
//! registry contract, the dispatcher that turns handler outcomes into MCP
//! results, and the stdio server wiring.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      atlassian-mcp                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — static tool table and lookup          │
//! │  schema helpers — make_tool, parse_args, pretty_json        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AdapterServer — dispatcher (implements ServerHandler)      │
//! │  ServerConfig — server metadata (name, version)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolError — protocol fault vs. isError tool result         │
//! │  logging — stderr tracing subscriber                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use atlassian_mcp::{AdapterServer, ServerConfig};
//!
//! let tools = JiraTools::new(client);
//!
//! AdapterServer::new(tools, ServerConfig::new("jira-mcp", "1.0.0"))
//!     .serve_stdio()
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod logging;
pub mod registry;
pub mod schema;
pub mod server;

/// MCP model types (tools, results, errors).
pub use rmcp::model;

// Re-exports — registry
pub use registry::{ToolFuture, ToolRegistry};

// Re-exports — server
pub use server::{AdapterServer, ServerConfig};

// Re-exports — error
pub use error::{Error, Result, ToolError};
