//! Error types for atlassian-mcp
//!
//! Two tiers of failure reach the dispatcher:
//!
//! - protocol faults (unknown tool, arguments that do not decode) are
//!   answered with an [`ErrorData`] and never become a tool result;
//! - execution failures (vendor errors, unrenderable bodies) become a
//!   [`CallToolResult`] with `isError: true` and the text `Error: <message>`.

use rmcp::model::{CallToolResult, Content, ErrorData};
use thiserror::Error;

/// Result type alias for atlassian-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The stdio transport failed to initialize
    #[error("Transport error: {0}")]
    Transport(String),

    /// The serving task ended abnormally
    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failure raised by a tool handler.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ToolError {
    /// The arguments do not match the tool's declared schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// The vendor call failed (non-2xx, transport, undecodable body).
    #[error(transparent)]
    Vendor(#[from] atlassian_client::Error),

    /// The vendor response could not be rendered as text.
    #[error("Failed to render response: {0}")]
    Render(#[source] serde_json::Error),
}

impl ToolError {
    /// Whether this failure is a protocol-level fault rather than a tool
    /// result.
    pub fn is_protocol_fault(&self) -> bool {
        matches!(self, ToolError::InvalidArguments(_))
    }

    /// Convert into the dispatcher's answer: an `Err` for protocol faults,
    /// an `isError` result for everything else.
    pub fn into_call_result(self) -> std::result::Result<CallToolResult, ErrorData> {
        if self.is_protocol_fault() {
            return Err(ErrorData::invalid_params(self.to_string(), None));
        }
        Ok(error_result(&self.to_string()))
    }
}

/// `isError` tool result carrying `Error: <message>`.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}
