//! Typed arguments for the Jira tools and the requests built from them.
//!
//! Required fields are plain values, everything else is optional. Defaults
//! are applied here, when the outbound request is built, not by the schema.

use atlassian_client::QueryParams;
use atlassian_mcp::schema::{non_empty, non_empty_list};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page size used when `maxResults` is absent or zero.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Field selector meaning "every field".
pub const ALL_FIELDS: &str = "*all";

// ---------------------------------------------------------------------------
// jql_search
// ---------------------------------------------------------------------------

/// Page position forwarded as `startAt`.
///
/// Clients send either an offset or the token string from a previous page;
/// both are forwarded unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageToken {
    /// Numeric offset
    Offset(u64),
    /// Opaque token
    Token(String),
}

impl Default for PageToken {
    fn default() -> Self {
        PageToken::Offset(0)
    }
}

/// Arguments for `jql_search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JqlSearchArgs {
    /// JQL query string.
    pub jql: String,
    /// Token or offset of the page to fetch (default 0).
    pub next_page_token: Option<PageToken>,
    /// Maximum results to fetch (default 50).
    pub max_results: Option<u32>,
    /// Fields to return for each issue (default all).
    pub fields: Option<Vec<String>>,
    /// Additional info to include in the response.
    pub expand: Option<String>,
}

/// JSON body of `POST /rest/api/2/search`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// JQL query string
    pub jql: String,
    /// Page position
    pub start_at: PageToken,
    /// Page size
    pub max_results: u32,
    /// Field selection
    pub fields: Vec<String>,
    /// Expansions, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

impl JqlSearchArgs {
    /// Build the search body, applying defaults.
    ///
    /// An empty `fields` list means "all fields", an empty token means the
    /// first page and a zero `maxResults` means the default page size.
    pub fn into_request(self) -> SearchRequest {
        let start_at = match self.next_page_token {
            Some(PageToken::Token(token)) if !token.is_empty() => PageToken::Token(token),
            Some(PageToken::Offset(offset)) => PageToken::Offset(offset),
            _ => PageToken::default(),
        };

        SearchRequest {
            jql: self.jql,
            start_at,
            max_results: self
                .max_results
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_RESULTS),
            fields: non_empty_list(self.fields).unwrap_or_else(|| vec![ALL_FIELDS.to_string()]),
            expand: self.expand,
        }
    }
}

// ---------------------------------------------------------------------------
// get_issue
// ---------------------------------------------------------------------------

/// Arguments for `get_issue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueArgs {
    /// ID or key of the issue.
    pub issue_id_or_key: String,
    /// Fields to include in the response.
    pub fields: Option<Vec<String>>,
    /// Additional information to include in the response.
    pub expand: Option<String>,
    /// Properties to include in the response.
    pub properties: Option<Vec<String>>,
    /// Fail quickly on errors (default false).
    pub fail_fast: Option<bool>,
}

impl GetIssueArgs {
    /// Query string for the issue request; absent options are left out.
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(fields) = non_empty_list(self.fields.clone()) {
            query.push(("fields", fields.join(",")));
        }
        if let Some(expand) = non_empty(self.expand.clone()) {
            query.push(("expand", expand));
        }
        if let Some(properties) = non_empty_list(self.properties.clone()) {
            query.push(("properties", properties.join(",")));
        }
        if let Some(fail_fast) = self.fail_fast {
            query.push(("failFast", fail_fast.to_string()));
        }
        query
    }
}

// ---------------------------------------------------------------------------
// log_work
// ---------------------------------------------------------------------------

/// How Jira adjusts the remaining estimate after a worklog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustEstimate {
    /// Set the estimate to `newEstimate`
    New,
    /// Leave the estimate unchanged
    Leave,
    /// Reduce the estimate by `reduceBy`
    Manual,
    /// Reduce the estimate by the time logged
    #[default]
    Auto,
}

impl AdjustEstimate {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustEstimate::New => "new",
            AdjustEstimate::Leave => "leave",
            AdjustEstimate::Manual => "manual",
            AdjustEstimate::Auto => "auto",
        }
    }
}

/// Arguments for `log_work`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkArgs {
    /// ID or key of the issue to log work against.
    pub issue_id_or_key: String,
    /// Time spent in Jira duration format ("1h 30m"); wins over seconds.
    pub time_spent: Option<String>,
    /// Time spent in seconds.
    pub time_spent_seconds: Option<u64>,
    /// Start of the work; defaults to now.
    pub started: Option<String>,
    /// Description of the work performed.
    pub comment: Option<String>,
    /// Estimate adjustment mode (default auto).
    pub adjust_estimate: Option<AdjustEstimate>,
    /// New estimate, used only with `adjustEstimate=new`.
    pub new_estimate: Option<String>,
    /// Reduction, used only with `adjustEstimate=manual`.
    pub reduce_by: Option<String>,
}

/// JSON body of `POST /rest/api/2/issue/{id}/worklog`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRequest {
    /// Work description
    pub comment: String,
    /// Start timestamp
    pub started: String,
    /// Duration string, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    /// Duration in seconds, when given and no duration string was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<u64>,
}

/// Jira worklog timestamp: `2023-06-15T10:00:00.000+0000`.
pub fn format_started(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3f+0000").to_string()
}

impl LogWorkArgs {
    /// Worklog body; `now` fills in a missing `started`.
    pub fn request(&self, now: DateTime<Utc>) -> WorklogRequest {
        let time_spent = non_empty(self.time_spent.clone());
        let time_spent_seconds = match time_spent {
            Some(_) => None,
            None => self.time_spent_seconds.filter(|s| *s > 0),
        };

        WorklogRequest {
            comment: self.comment.clone().unwrap_or_default(),
            started: non_empty(self.started.clone()).unwrap_or_else(|| format_started(now)),
            time_spent,
            time_spent_seconds,
        }
    }

    /// Estimate adjustment mode, `auto` when absent.
    pub fn adjust_estimate(&self) -> AdjustEstimate {
        self.adjust_estimate.unwrap_or_default()
    }

    /// Query string carrying the estimate adjustment.
    pub fn query(&self) -> QueryParams {
        let adjust = self.adjust_estimate();
        let mut query: QueryParams = vec![("adjustEstimate", adjust.as_str().to_string())];
        match adjust {
            AdjustEstimate::New => {
                if let Some(estimate) = non_empty(self.new_estimate.clone()) {
                    query.push(("newEstimate", estimate));
                }
            }
            AdjustEstimate::Manual => {
                if let Some(reduce_by) = non_empty(self.reduce_by.clone()) {
                    query.push(("reduceBy", reduce_by));
                }
            }
            AdjustEstimate::Leave | AdjustEstimate::Auto => {}
        }
        query
    }
}

// ============================================================================
// Tests
// ============================================================================
