//! End-to-end CLI scenarios: the spacectl binary against a stub API server

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A command with a clean environment: no ambient tokens, no log filter
fn spacectl() -> Command {
    let mut cmd = Command::cargo_bin("spacectl").unwrap();
    cmd.env_remove("HF_TOKEN")
        .env_remove("HUGGINGFACE_TOKEN")
        .env_remove("HF_ENDPOINT")
        .env_remove("RUST_LOG");
    cmd
}

fn space_body(id: &str) -> Value {
    json!({
        "id": id,
        "author": "alice",
        "sha": "abc123",
        "lastModified": "2024-03-01T12:00:00Z",
        "private": false,
        "likes": 3,
        "sdk": "gradio"
    })
}

#[test]
fn no_subcommand_prints_usage_and_exits_1() {
    spacectl()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_json_array_with_expected_fields() {
    let server = MockServer::start().await;

    let bodies: Vec<Value> = (1..=5)
        .map(|i| space_body(&format!("alice/demo-{i}")))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/spaces"))
        .and(query_param("author", "alice"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bodies))
        .mount(&server)
        .await;

    let output = spacectl()
        .args(["--endpoint", &server.uri(), "list", "--author", "alice", "--limit", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    for entry in entries {
        let obj = entry.as_object().unwrap();
        for key in ["id", "author", "sha", "last_modified", "private", "likes", "sdk"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn restart_against_404_prints_diagnostic_and_exits_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/alice/demo/restart"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    spacectl()
        .args(["--endpoint", &server.uri(), "--token", "hf_token", "restart", "alice/demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error restarting space"));
}

#[tokio::test(flavor = "multi_thread")]
async fn restart_without_token_fails_locally() {
    let server = MockServer::start().await;

    spacectl()
        .args(["--endpoint", &server.uri(), "restart", "alice/demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Token is required"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn restart_success_prints_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/alice/demo/restart"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    spacectl()
        .args(["--endpoint", &server.uri(), "--token", "hf_token", "restart", "alice/demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully restarted space: alice/demo",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn pause_success_prints_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/alice/demo/pause"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    spacectl()
        .args(["--endpoint", &server.uri(), "--token", "hf_token", "pause", "alice/demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully paused space: alice/demo",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn info_without_runtime_reports_nulls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spaces/alice/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(space_body("alice/demo")))
        .mount(&server)
        .await;

    let output = spacectl()
        .args(["--endpoint", &server.uri(), "info", "alice/demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["runtime"], Value::Null);
    assert_eq!(parsed["hardware"], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn info_missing_space_exits_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spaces/alice/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    spacectl()
        .args(["--endpoint", &server.uri(), "info", "alice/missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error getting space info"));
}

#[tokio::test(flavor = "multi_thread")]
async fn runtime_prints_status_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spaces/alice/demo/runtime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stage": "SLEEPING",
            "hardware": { "current": "cpu-basic", "requested": null },
            "gcTimeout": 3600
        })))
        .mount(&server)
        .await;

    let output = spacectl()
        .args(["--endpoint", &server.uri(), "runtime", "alice/demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["stage"], "SLEEPING");
    assert_eq!(parsed["hardware"], "cpu-basic");
    assert_eq!(parsed["requested_hardware"], Value::Null);
    assert_eq!(parsed["sleep_time"], 3600);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_lists_spaces_with_fixed_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spaces"))
        .and(query_param("author", "bob"))
        .and(query_param("limit", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([space_body("bob/tool")])),
        )
        .mount(&server)
        .await;

    let output = spacectl()
        .args(["--endpoint", &server.uri(), "user", "bob"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["id"], "bob/tool");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_remote_failure_still_exits_0_with_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spaces"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let output = spacectl()
        .args(["--endpoint", &server.uri(), "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().unwrap().is_empty());
}
