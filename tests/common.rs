//! Test helper utilities for gigachat-client integration tests
//!
//! Shared fixtures for tests that run the client against a wiremock
//! `MockServer` standing in for both the OAuth and the chat endpoint.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use gigachat_client::{ChatMessage, ChatRequest, ClientConfig, Credentials, GigaChatClient};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const AUTH_PATH: &str = "/api/v2/oauth";
pub const CHAT_PATH: &str = "/api/v1/chat/completions";

pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_CLIENT_SECRET: &str = "test-client-secret-value";

/// Base URL nothing listens on, for transport failure tests
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api/v1";

/// Configuration pointing both endpoints at the mock server
pub fn create_test_config(server: &MockServer) -> ClientConfig {
    let mut config =
        ClientConfig::new(Credentials::client_pair(TEST_CLIENT_ID, TEST_CLIENT_SECRET));
    config.base_url = format!("{}/api/v1", server.uri());
    config.request_timeout = Duration::from_secs(5);
    config
}

pub fn create_test_client(server: &MockServer) -> GigaChatClient {
    GigaChatClient::new(create_test_config(server)).expect("Failed to create test client")
}

/// Expected `Authorization` header for the OAuth request
pub fn expected_basic_header() -> String {
    format!(
        "Basic {}",
        Credentials::client_pair(TEST_CLIENT_ID, TEST_CLIENT_SECRET).basic_auth_value()
    )
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Expiry comfortably outside the renewal buffer
pub fn fresh_expiry() -> i64 {
    now_millis() + 30 * 60_000
}

pub fn auth_success_body(token: &str, expires_at: i64) -> serde_json::Value {
    serde_json::json!({
        "access_token": token,
        "expires_at": expires_at
    })
}

pub fn chat_success_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            },
            "index": 0,
            "finish_reason": "stop"
        }],
        "created": 1_706_000_000,
        "model": "GigaChat:1.0.26.20",
        "object": "chat.completion",
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

/// Mount a successful OAuth response expected exactly `calls` times
pub async fn mount_auth_success(server: &MockServer, token: &str, expires_at: i64, calls: u64) {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_success_body(token, expires_at)))
        .expect(calls)
        .mount(server)
        .await;
}

/// Mount a successful chat response expected exactly `calls` times
pub async fn mount_chat_success(server: &MockServer, content: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_body(content)))
        .expect(calls)
        .mount(server)
        .await;
}

pub fn user_request(text: &str) -> ChatRequest {
    ChatRequest::new(vec![ChatMessage::user(text)])
}

/// Number of requests the mock server received on `request_path`
pub async fn count_requests(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}
