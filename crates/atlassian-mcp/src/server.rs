//! Adapter MCP server.
//!
//! [`AdapterServer`] is the dispatcher: it answers tool discovery from its
//! registry and routes each call to exactly one handler, converting the
//! outcome into an MCP result. It is bound to stdin/stdout by
//! [`AdapterServer::serve_stdio`].

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::logging::STARTUP_TARGET;
use crate::registry::ToolRegistry;

/// Server metadata reported during MCP initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl ServerConfig {
    /// Metadata with a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// MCP server backed by a static [`ToolRegistry`].
///
/// Holds no per-call state; clones share the same registry.
#[derive(Clone)]
pub struct AdapterServer {
    registry: Arc<dyn ToolRegistry>,
    config: ServerConfig,
}

impl AdapterServer {
    /// Create a server over a registry.
    pub fn new<R: ToolRegistry + 'static>(registry: R, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Server metadata.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Tool descriptors, straight from the registry.
    pub fn list(&self) -> Vec<Tool> {
        self.registry.tools()
    }

    /// Route one invocation to its handler.
    ///
    /// - unknown tool → `Err` (routing fault, not a tool result)
    /// - arguments that do not decode → `Err` (invalid params)
    /// - handler failure → `Ok` with `isError: true` and `Error: <message>`
    /// - success → `Ok` with the handler's text
    pub async fn dispatch(
        &self,
        name: &str,
        args: Value,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let Some(future) = self.registry.call(name, args) else {
            tracing::warn!(tool = name, "call to unknown tool");
            return Err(ErrorData::invalid_params(
                format!("Tool not found: {name}"),
                None,
            ));
        };

        tracing::debug!(tool = name, "dispatching tool call");
        match future.await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                e.into_call_result()
            }
        }
    }

    /// Attach the server to stdin/stdout and serve until the client goes
    /// away.
    ///
    /// `<name> server running on stdio` is logged on the startup target as
    /// soon as the transport is attached, before the client's `initialize`.
    pub async fn serve_stdio(self) -> Result<()> {
        let name = self.config.name.clone();
        let tool_count = self.registry.tool_count();

        let transport = rmcp::transport::stdio();
        tracing::info!(
            target: STARTUP_TARGET,
            tools = tool_count,
            "{name} server running on stdio"
        );

        let service = self
            .serve(transport)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        tracing::debug!("{name} initialized");

        let reason = service.waiting().await?;
        tracing::info!(?reason, "{name} server stopped");
        Ok(())
    }
}

impl ServerHandler for AdapterServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = self.config.name.clone();
        info.server_info.version = self.config.version.clone();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.list()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        self.dispatch(&request.name, args).await
    }
}

// ============================================================================
// Tests
// ============================================================================
