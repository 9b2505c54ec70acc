//! Integration tests for `confluence.createPage`.

use serde_json::{Value, json};

use crate::common::{TestHarness, fixed_body, text};

#[tokio::test]
async fn test_create_page_without_parent() {
    let harness = TestHarness::new().await;

    let result = harness
        .call(
            "confluence.createPage",
            json!({"spaceKey": "OPS", "title": "Incident 42", "html": "<p>Timeline</p>"}),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text(&result), serde_json::to_string_pretty(&fixed_body()).unwrap());

    let request = harness.only_request().await;
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.path(), "/rest/api/content");
    assert_eq!(request.url.query(), None);

    let body = request.body_json::<Value>().unwrap();
    assert_eq!(
        body,
        json!({
            "type": "page",
            "title": "Incident 42",
            "space": {"key": "OPS"},
            "body": {"storage": {"value": "<p>Timeline</p>", "representation": "storage"}}
        })
    );
    assert!(body.get("ancestors").is_none());
}

#[tokio::test]
async fn test_create_page_with_parent() {
    let harness = TestHarness::new().await;

    harness
        .call(
            "confluence.createPage",
            json!({
                "spaceKey": "OPS",
                "title": "Incident 43",
                "html": "<p/>",
                "parentId": "65601"
            }),
        )
        .await;

    let body = harness.only_request().await.body_json::<Value>().unwrap();
    assert_eq!(body["ancestors"], json!([{"id": "65601"}]));
}
