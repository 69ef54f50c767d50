//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with a server up: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_help_command_round_trip() {
    let client = Client::new();

    let response = client
        .post(format!("{}/webhook", BASE_URL))
        .json(&json!({
            "chat_id": 1,
            "text": "/help"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let replies = body["replies"].as_array().expect("No replies array");
    assert_eq!(replies.len(), 1);
    assert!(replies[0]["text"]
        .as_str()
        .expect("No reply text")
        .contains("/equipment"));
}

#[tokio::test]
#[ignore]
async fn test_unknown_command_is_answered() {
    let client = Client::new();

    let response = client
        .post(format!("{}/webhook", BASE_URL))
        .json(&json!({
            "chat_id": 1,
            "text": "/frobnicate"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let replies = body["replies"].as_array().expect("No replies array");
    assert!(replies[0]["text"]
        .as_str()
        .expect("No reply text")
        .contains("/help"));
}
