//! Tool registry trait for the adapter servers.
//!
//! This module defines the `ToolRegistry` trait that abstracts over tool
//! declaration and lookup. Each adapter implements it once with a static
//! table of tools; the [`AdapterServer`](crate::AdapterServer) delegates
//! `list_tools` and `call_tool` to it.

use rmcp::model::Tool;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

use crate::error::ToolError;

/// Future returned by a tool handler.
///
/// Resolves to the text of the tool result on success. Failures are
/// classified by the dispatcher (see [`ToolError::into_call_result`]).
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send>>;

/// Trait for declaring and dispatching MCP tools.
///
/// `tools()` must not touch the network or depend on credentials: tool
/// discovery has to succeed even when the vendor is unreachable.
///
/// # Example
///
/// ```rust,ignore
/// struct MyTools { /* ... */ }
///
/// impl ToolRegistry for MyTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolFuture> {
///         match name {
///             "my_tool" => Some(Box::pin(self.handle_my_tool(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns the descriptors of all available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolFuture>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

// ============================================================================
// Tests
// ============================================================================
