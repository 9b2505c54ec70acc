//! Failure paths: vendor errors, routing faults, bad arguments.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestHarness, fixed_body, text};

#[tokio::test]
async fn test_not_found_becomes_error_result() {
    let harness = TestHarness::empty().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/NOPE-1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&harness.jira)
        .await;

    let result = harness.call("get_issue", json!({"issueIdOrKey": "NOPE-1"})).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        text(&result),
        "Error: Jira API Error: 404 Not Found - Not Found"
    );
}

#[tokio::test]
async fn test_server_error_body_is_preserved() {
    let harness = TestHarness::empty().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"errorMessages":["Error in the JQL Query"]}"#),
        )
        .mount(&harness.jira)
        .await;

    let result = harness.call("jql_search", json!({"jql": "((("})).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        text(&result),
        r#"Error: Jira API Error: 400 Bad Request - {"errorMessages":["Error in the JQL Query"]}"#
    );
}

#[tokio::test]
async fn test_failure_does_not_stop_later_calls() {
    let harness = TestHarness::empty().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/GONE-1"))
        .respond_with(ResponseTemplate::new(410).set_body_string("gone"))
        .mount(&harness.jira)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/ABC-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixed_body()))
        .mount(&harness.jira)
        .await;

    let failed = harness.call("get_issue", json!({"issueIdOrKey": "GONE-1"})).await;
    assert_eq!(failed.is_error, Some(true));

    let ok = harness.call("get_issue", json!({"issueIdOrKey": "ABC-1"})).await;
    assert_eq!(ok.is_error, Some(false));
}

#[tokio::test]
async fn test_unknown_tool_is_routing_fault() {
    let harness = TestHarness::new().await;

    let err = harness
        .server
        .dispatch("delete_issue", json!({"issueIdOrKey": "ABC-1"}))
        .await
        .unwrap_err();

    assert!(err.message.contains("Tool not found: delete_issue"));
    assert!(harness.jira.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_argument_sends_nothing() {
    let harness = TestHarness::new().await;

    let err = harness
        .server
        .dispatch("log_work", json!({"timeSpent": "1h"}))
        .await
        .unwrap_err();

    assert!(err.message.contains("issueIdOrKey"));
    assert!(harness.jira.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_discovery_without_vendor() {
    let harness = TestHarness::empty().await;
    drop(harness.jira);

    let names: Vec<String> = harness
        .server
        .list()
        .iter()
        .map(|t| t.name.to_string())
        .collect();
    assert_eq!(names, vec!["jql_search", "get_issue", "log_work"]);
}

#[tokio::test]
async fn test_every_tool_succeeds_with_required_arguments() {
    let calls = [
        ("jql_search", json!({"jql": "project = ABC"})),
        ("get_issue", json!({"issueIdOrKey": "ABC-1"})),
        ("log_work", json!({"issueIdOrKey": "ABC-1"})),
    ];

    for (name, args) in calls {
        let harness = TestHarness::new().await;
        let result = harness.call(name, args).await;
        assert_eq!(result.is_error, Some(false), "{name} failed");
        assert_eq!(
            text(&result),
            serde_json::to_string_pretty(&fixed_body()).unwrap()
        );
    }
}
