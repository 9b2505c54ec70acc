//! Integration tests for `jql_search`.

use serde_json::{Value, json};

use crate::common::{BASIC_AUTH, TestHarness, fixed_body, text};

#[tokio::test]
async fn test_search_with_only_jql() {
    let harness = TestHarness::new().await;

    let result = harness
        .call("jql_search", json!({"jql": "project = ABC"}))
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text(&result), serde_json::to_string_pretty(&fixed_body()).unwrap());

    let request = harness.only_request().await;
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.path(), "/rest/api/2/search");
    assert_eq!(request.headers.get("authorization").unwrap(), BASIC_AUTH);
    assert_eq!(
        request.headers.get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        request.body_json::<Value>().unwrap(),
        json!({
            "jql": "project = ABC",
            "startAt": 0,
            "maxResults": 50,
            "fields": ["*all"]
        })
    );
}

#[tokio::test]
async fn test_search_empty_fields_sends_all() {
    let harness = TestHarness::new().await;

    harness
        .call("jql_search", json!({"jql": "status = Done", "fields": []}))
        .await;

    let body = harness.only_request().await.body_json::<Value>().unwrap();
    assert_eq!(body["fields"], json!(["*all"]));
}

#[tokio::test]
async fn test_search_forwards_paging_and_expand() {
    let harness = TestHarness::new().await;

    harness
        .call(
            "jql_search",
            json!({
                "jql": "status = Done",
                "nextPageToken": "50",
                "maxResults": 25,
                "fields": ["summary"],
                "expand": "names"
            }),
        )
        .await;

    let body = harness.only_request().await.body_json::<Value>().unwrap();
    assert_eq!(
        body,
        json!({
            "jql": "status = Done",
            "startAt": "50",
            "maxResults": 25,
            "fields": ["summary"],
            "expand": "names"
        })
    );
}
