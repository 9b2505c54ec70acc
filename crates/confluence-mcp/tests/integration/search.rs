//! Integration tests for `confluence.search`.

use serde_json::json;

use crate::common::{BEARER_AUTH, TestHarness, fixed_body, query_pairs, text};

#[tokio::test]
async fn test_search_with_only_cql() {
    let harness = TestHarness::new().await;

    let result = harness
        .call("confluence.search", json!({"cql": "space = OPS and type = page"}))
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        text(&result),
        serde_json::to_string_pretty(&fixed_body()["results"]).unwrap()
    );

    let request = harness.only_request().await;
    assert_eq!(request.method.as_str(), "GET");
    assert_eq!(request.url.path(), "/rest/api/content/search");
    assert_eq!(request.headers.get("authorization").unwrap(), BEARER_AUTH);
    assert_eq!(
        request.headers.get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        query_pairs(&request),
        vec![
            ("cql".to_string(), "space = OPS and type = page".to_string()),
            ("limit".to_string(), "25".to_string()),
            ("expand".to_string(), "body.storage".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_search_with_limit_and_expand() {
    let harness = TestHarness::new().await;

    harness
        .call(
            "confluence.search",
            json!({"cql": "title ~ \"runbook\"", "limit": 3, "expand": "version"}),
        )
        .await;

    let request = harness.only_request().await;
    assert_eq!(
        query_pairs(&request),
        vec![
            ("cql".to_string(), "title ~ \"runbook\"".to_string()),
            ("limit".to_string(), "3".to_string()),
            ("expand".to_string(), "version".to_string()),
        ]
    );
}
