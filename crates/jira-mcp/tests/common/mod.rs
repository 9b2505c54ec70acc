//! Common test utilities for the Jira adapter integration tests.

use atlassian_client::{Credential, Vendor, VendorClient};
use atlassian_mcp::AdapterServer;
use atlassian_mcp::model::CallToolResult;
use jira_mcp::JiraTools;
use serde_json::{Value, json};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Basic auth header for `dev@example.com:secret`.
pub const BASIC_AUTH: &str = "Basic ZGV2QGV4YW1wbGUuY29tOnNlY3JldA==";

/// Body every stubbed endpoint answers with.
pub fn fixed_body() -> Value {
    json!({
        "id": "10001",
        "key": "ABC-1",
        "fields": {
            "summary": "Fix login redirect",
            "labels": ["auth", "web"]
        }
    })
}

/// Test harness: a stub Jira plus an adapter server pointed at it.
pub struct TestHarness {
    /// Stub vendor API
    pub jira: MockServer,
    /// Dispatcher under test
    pub server: AdapterServer,
}

impl TestHarness {
    /// Start a stub Jira that echoes [`fixed_body`] for every request.
    pub async fn new() -> Self {
        let harness = Self::empty().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(fixed_body()))
            .mount(&harness.jira)
            .await;
        harness
    }

    /// Start a stub Jira with no routes mounted.
    pub async fn empty() -> Self {
        let jira = MockServer::start().await;
        let client = VendorClient::new(
            Vendor::Jira,
            jira.uri(),
            Credential::basic("dev@example.com", "secret"),
        )
        .expect("client should build");
        let server = AdapterServer::new(JiraTools::new(client), jira_mcp::server_config());
        Self { jira, server }
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
        let mut requests = self.jira.received_requests().await.unwrap();
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
