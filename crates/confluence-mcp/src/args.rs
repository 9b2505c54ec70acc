//! Typed arguments for the Confluence tools.

use atlassian_client::QueryParams;
use atlassian_mcp::schema::non_empty;
use serde::{Deserialize, Serialize};

/// Result count used when `limit` is absent.
pub const DEFAULT_SEARCH_LIMIT: u32 = 25;

/// Expansion used by `confluence.search` when `expand` is absent.
pub const DEFAULT_SEARCH_EXPAND: &str = "body.storage";

/// Expansion used by `confluence.getPage` when `expand` is absent.
pub const DEFAULT_PAGE_EXPAND: &str = "body.storage,version,space";

/// Arguments for `confluence.search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    /// CQL search string.
    pub cql: String,
    /// Maximum number of results (default 25).
    pub limit: Option<u32>,
    /// Fields to expand (default `body.storage`).
    pub expand: Option<String>,
}

impl SearchArgs {
    /// Query string for `GET /content/search`.
    pub fn query(&self) -> QueryParams {
        vec![
            ("cql", self.cql.clone()),
            ("limit", self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string()),
            (
                "expand",
                non_empty(self.expand.clone()).unwrap_or_else(|| DEFAULT_SEARCH_EXPAND.to_string()),
            ),
        ]
    }
}

/// Arguments for `confluence.getPage`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPageArgs {
    /// Page ID.
    pub id: String,
    /// Fields to expand (default `body.storage,version,space`).
    pub expand: Option<String>,
}

impl GetPageArgs {
    /// Query string for `GET /content/{id}`.
    pub fn query(&self) -> QueryParams {
        vec![(
            "expand",
            non_empty(self.expand.clone()).unwrap_or_else(|| DEFAULT_PAGE_EXPAND.to_string()),
        )]
    }
}

/// Arguments for `confluence.createPage`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageArgs {
    /// Space key the page is created in.
    pub space_key: String,
    /// Page title.
    pub title: String,
    /// Page content in storage-format HTML.
    pub html: String,
    /// Parent page ID.
    pub parent_id: Option<String>,
}

/// Space reference inside a page body.
#[derive(Debug, PartialEq, Serialize)]
pub struct SpaceRef {
    /// Space key
    pub key: String,
}

/// Storage-format content.
#[derive(Debug, PartialEq, Serialize)]
pub struct Storage {
    /// Markup
    pub value: String,
    /// Always `storage`
    pub representation: &'static str,
}

/// Page body wrapper.
#[derive(Debug, PartialEq, Serialize)]
pub struct PageBody {
    /// Storage representation
    pub storage: Storage,
}

/// Parent page reference.
#[derive(Debug, PartialEq, Serialize)]
pub struct Ancestor {
    /// Parent page ID
    pub id: String,
}

/// JSON body of `POST /content`.
#[derive(Debug, PartialEq, Serialize)]
pub struct CreatePageRequest {
    /// Always `page`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Page title
    pub title: String,
    /// Target space
    pub space: SpaceRef,
    /// Content
    pub body: PageBody,
    /// Parent chain; absent (not empty) for top-level pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<Vec<Ancestor>>,
}

impl CreatePageArgs {
    /// Build the create-page body.
    pub fn into_request(self) -> CreatePageRequest {
        CreatePageRequest {
            kind: "page",
            title: self.title,
            space: SpaceRef {
                key: self.space_key,
            },
            body: PageBody {
                storage: Storage {
                    value: self.html,
                    representation: "storage",
                },
            },
            ancestors: non_empty(self.parent_id).map(|id| vec![Ancestor { id }]),
        }
    }
}
