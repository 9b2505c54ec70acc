//! Common test utilities for the Confluence adapter integration tests.

use atlassian_client::{Credential, Vendor, VendorClient};
use atlassian_mcp::AdapterServer;
use atlassian_mcp::model::CallToolResult;
use confluence_mcp::ConfluenceTools;
use serde_json::{Value, json};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Authorization header for the test token.
pub const BEARER_AUTH: &str = "Bearer pat-test";

/// Path prefix of the stubbed REST root.
pub const REST_ROOT: &str = "/rest/api";

/// Body every stubbed endpoint answers with.
pub fn fixed_body() -> Value {
    json!({
        "results": [
            {"id": "65601", "type": "page", "title": "Release checklist"},
            {"id": "65602", "type": "page", "title": "On-call guide"}
        ],
        "start": 0,
        "limit": 25,
        "size": 2
    })
}

/// Test harness: a stub Confluence plus an adapter server pointed at it.
pub struct TestHarness {
    /// Stub vendor API
    pub wiki: MockServer,
    /// Dispatcher under test
    pub server: AdapterServer,
}

impl TestHarness {
    /// Start a stub Confluence that echoes [`fixed_body`] for every request.
    pub async fn new() -> Self {
        let harness = Self::empty().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(fixed_body()))
            .mount(&harness.wiki)
            .await;
        harness
    }

    /// Start a stub Confluence with no routes mounted.
    pub async fn empty() -> Self {
        let wiki = MockServer::start().await;
        let client = VendorClient::new(
            Vendor::Confluence,
            format!("{}{REST_ROOT}", wiki.uri()),
            Credential::bearer("pat-test"),
        )
        .expect("client should build");
        let server = AdapterServer::new(ConfluenceTools::new(client), confluence_mcp::server_config());
        Self { wiki, server }
    }

    /// Invoke a tool, expecting a tool result rather than a protocol fault.
    pub async fn call(&self, name: &str, args: Value) -> CallToolResult {
        self.server
            .dispatch(name, args)
            .await
            .expect("dispatch should produce a tool result")
    }

    /// The single request the stub received.
    pub async fn only_request(&self) -> Request {
        let mut requests = self.wiki.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one vendor request");
        requests.remove(0)
    }
}

/// Text of the single content block of a result.
pub fn text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1);
    result.content[0]
        .raw
        .as_text()
        .map(|t| t.text.clone())
        .expect("content should be text")
}

/// Query pairs of a received request, in order.
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
