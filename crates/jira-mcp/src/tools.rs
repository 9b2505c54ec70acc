//! MCP tools for Jira.
//!
//! Provides `JiraTools` that implements `ToolRegistry` by mapping each tool
//! call onto one request against the Jira REST API v2.

use atlassian_client::VendorClient;
use atlassian_mcp::ToolError;
use atlassian_mcp::model::Tool;
use atlassian_mcp::registry::{ToolFuture, ToolRegistry};
use atlassian_mcp::schema::{make_tool, parse_args, pretty_json};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::args::{GetIssueArgs, JqlSearchArgs, LogWorkArgs};

/// `jql_search` tool name.
pub const JQL_SEARCH: &str = "jql_search";
/// `get_issue` tool name.
pub const GET_ISSUE: &str = "get_issue";
/// `log_work` tool name.
pub const LOG_WORK: &str = "log_work";

const SEARCH_PATH: &[&str] = &["rest", "api", "2", "search"];

/// `rest/api/2/issue/{issueIdOrKey}` followed by `rest`; the key is always
/// a single segment.
fn issue_path<'a>(issue_id_or_key: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut path = vec!["rest", "api", "2", "issue", issue_id_or_key];
    path.extend_from_slice(rest);
    path
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /rest/api/2/search`
pub async fn jql_search(client: &VendorClient, args: JqlSearchArgs) -> Result<String, ToolError> {
    let body = args.into_request();
    let data = client.post(SEARCH_PATH, &[], &body).await?;
    pretty_json(&data)
}

/// `GET /rest/api/2/issue/{issueIdOrKey}`
pub async fn get_issue(client: &VendorClient, args: GetIssueArgs) -> Result<String, ToolError> {
    let data = client
        .get(&issue_path(&args.issue_id_or_key, &[]), &args.query())
        .await?;
    pretty_json(&data)
}

/// `POST /rest/api/2/issue/{issueIdOrKey}/worklog`
pub async fn log_work(client: &VendorClient, args: LogWorkArgs) -> Result<String, ToolError> {
    let body = args.request(Utc::now());
    let path = issue_path(&args.issue_id_or_key, &["worklog"]);
    let data = client.post(&path, &args.query(), &body).await?;
    pretty_json(&data)
}

// ---------------------------------------------------------------------------
// JiraTools
// ---------------------------------------------------------------------------

/// MCP tools for Jira.
///
/// Generates three tools:
/// - `jql_search` — JQL search
/// - `get_issue` — issue details by ID or key
/// - `log_work` — add a worklog entry
pub struct JiraTools {
    client: Arc<VendorClient>,
}

impl JiraTools {
    /// Create Jira tools over a client.
    pub fn new(client: VendorClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl ToolRegistry for JiraTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                JQL_SEARCH,
                "Perform enhanced JQL search in Jira",
                json!({
                    "type": "object",
                    "properties": {
                        "jql": {
                            "type": "string",
                            "description": "JQL query string"
                        },
                        "nextPageToken": {
                            "type": ["string", "integer"],
                            "description": "Token (or offset) of the page to fetch, sent as startAt (default 0)",
                            "default": 0
                        },
                        "maxResults": {
                            "type": "integer",
                            "description": "Maximum results to fetch (default 50)",
                            "default": 50
                        },
                        "fields": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "List of fields to return for each issue (default all fields)",
                            "default": ["*all"]
                        },
                        "expand": {
                            "type": "string",
                            "description": "Additional info to include in the response"
                        }
                    },
                    "required": ["jql"]
                }),
            ),
            make_tool(
                GET_ISSUE,
                "Retrieve details about an issue by its ID or key.",
                json!({
                    "type": "object",
                    "properties": {
                        "issueIdOrKey": {
                            "type": "string",
                            "description": "ID or key of the issue"
                        },
                        "fields": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Fields to include in the response"
                        },
                        "expand": {
                            "type": "string",
                            "description": "Additional information to include in the response"
                        },
                        "properties": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Properties to include in the response"
                        },
                        "failFast": {
                            "type": "boolean",
                            "description": "Fail quickly on errors",
                            "default": false
                        }
                    },
                    "required": ["issueIdOrKey"]
                }),
            ),
            make_tool(
                LOG_WORK,
                "Log time worked on an issue by adding a worklog entry.",
                json!({
                    "type": "object",
                    "properties": {
                        "issueIdOrKey": {
                            "type": "string",
                            "description": "ID or key of the issue to log work against"
                        },
                        "timeSpent": {
                            "type": "string",
                            "description": "Time spent in human readable format (e.g., '1h 30m', '2d', '45m'). Takes precedence over timeSpentSeconds"
                        },
                        "timeSpentSeconds": {
                            "type": "integer",
                            "description": "Time spent in seconds (alternative to timeSpent)"
                        },
                        "started": {
                            "type": "string",
                            "description": "When the work was started in ISO 8601 format (e.g., '2023-06-15T10:00:00.000+0000'). Defaults to current time if not provided."
                        },
                        "comment": {
                            "type": "string",
                            "description": "Description of the work performed",
                            "default": ""
                        },
                        "adjustEstimate": {
                            "type": "string",
                            "enum": ["new", "leave", "manual", "auto"],
                            "description": "How to adjust the remaining estimate: 'new' (set new estimate), 'leave' (leave unchanged), 'manual' (reduce by specified amount), 'auto' (reduce by time logged)",
                            "default": "auto"
                        },
                        "newEstimate": {
                            "type": "string",
                            "description": "New estimate value when adjustEstimate is 'new'"
                        },
                        "reduceBy": {
                            "type": "string",
                            "description": "Amount to reduce estimate by when adjustEstimate is 'manual'"
                        }
                    },
                    "required": ["issueIdOrKey"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolFuture> {
        let client = Arc::clone(&self.client);

        match name {
            JQL_SEARCH => Some(Box::pin(async move {
                jql_search(&client, parse_args(args)?).await
            })),
            GET_ISSUE => Some(Box::pin(async move {
                get_issue(&client, parse_args(args)?).await
            })),
            LOG_WORK => Some(Box::pin(async move {
                log_work(&client, parse_args(args)?).await
            })),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
