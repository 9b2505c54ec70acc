//! MCP tools for Confluence.
//!
//! Provides `ConfluenceTools` that implements `ToolRegistry` over the
//! Confluence content REST API.

use atlassian_client::VendorClient;
use atlassian_mcp::ToolError;
use atlassian_mcp::model::Tool;
use atlassian_mcp::registry::{ToolFuture, ToolRegistry};
use atlassian_mcp::schema::{make_tool, parse_args, pretty_json};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::args::{CreatePageArgs, GetPageArgs, SearchArgs};

/// `confluence.search` tool name.
pub const SEARCH: &str = "confluence.search";
/// `confluence.getPage` tool name.
pub const GET_PAGE: &str = "confluence.getPage";
/// `confluence.createPage` tool name.
pub const CREATE_PAGE: &str = "confluence.createPage";

/// The `results` array of a search response; `[]` when there is none.
fn search_results(data: Value) -> Value {
    match data {
        Value::Object(mut map) => map.remove("results").unwrap_or_else(|| json!([])),
        _ => json!([]),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /content/search`
pub async fn search(client: &VendorClient, args: SearchArgs) -> Result<String, ToolError> {
    let data = client.get(&["content", "search"], &args.query()).await?;
    pretty_json(&search_results(data))
}

/// `GET /content/{id}`
pub async fn get_page(client: &VendorClient, args: GetPageArgs) -> Result<String, ToolError> {
    let data = client.get(&["content", args.id.as_str()], &args.query()).await?;
    pretty_json(&data)
}

/// `POST /content`
pub async fn create_page(client: &VendorClient, args: CreatePageArgs) -> Result<String, ToolError> {
    let data = client.post(&["content"], &[], &args.into_request()).await?;
    pretty_json(&data)
}

// ---------------------------------------------------------------------------
// ConfluenceTools
// ---------------------------------------------------------------------------

/// MCP tools for Confluence.
pub struct ConfluenceTools {
    client: Arc<VendorClient>,
}

impl ConfluenceTools {
    /// Create Confluence tools over a client.
    pub fn new(client: VendorClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl ToolRegistry for ConfluenceTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                SEARCH,
                "Search pages via CQL",
                json!({
                    "type": "object",
                    "properties": {
                        "cql": {
                            "type": "string",
                            "description": "Confluence Query Language search string"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results to return (default: 25)",
                            "default": 25
                        },
                        "expand": {
                            "type": "string",
                            "description": "Fields to expand in the response (default: body.storage)",
                            "default": "body.storage"
                        }
                    },
                    "required": ["cql"]
                }),
            ),
            make_tool(
                GET_PAGE,
                "Get a page by ID",
                json!({
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Page ID"
                        },
                        "expand": {
                            "type": "string",
                            "description": "Fields to expand in the response (default: body.storage,version,space)",
                            "default": "body.storage,version,space"
                        }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                CREATE_PAGE,
                "Create a new page",
                json!({
                    "type": "object",
                    "properties": {
                        "spaceKey": {
                            "type": "string",
                            "description": "Space key where the page should be created"
                        },
                        "title": {
                            "type": "string",
                            "description": "Page title"
                        },
                        "html": {
                            "type": "string",
                            "description": "Page content in HTML storage format"
                        },
                        "parentId": {
                            "type": "string",
                            "description": "Parent page ID (optional)"
                        }
                    },
                    "required": ["spaceKey", "title", "html"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolFuture> {
        let client = Arc::clone(&self.client);

        match name {
            SEARCH => Some(Box::pin(async move {
                search(&client, parse_args(args)?).await
            })),
            GET_PAGE => Some(Box::pin(async move {
                get_page(&client, parse_args(args)?).await
            })),
            CREATE_PAGE => Some(Box::pin(async move {
                create_page(&client, parse_args(args)?).await
            })),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
