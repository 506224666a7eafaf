//! Test helper utilities for gigachat-client unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::{ClientConfig, Credentials, PublicConfig};
use crate::core_types::messages::{ChatChoice, ChatMessage, ChatResponse, TokenUsage};
use std::collections::HashMap;

pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_CLIENT_SECRET: &str = "test-client-secret-value";
pub const TEST_AUTH_KEY: &str = "dGVzdC1hdXRob3JpemF0aW9uLWtleQ==";

/// Valid configuration with a client id/secret pair
pub fn create_test_config() -> ClientConfig {
    ClientConfig::new(Credentials::client_pair(TEST_CLIENT_ID, TEST_CLIENT_SECRET))
}

/// Public snapshot matching `create_test_config`
pub fn create_public_config() -> PublicConfig {
    create_test_config().public()
}

/// A one-choice assistant reply
pub fn create_chat_response(content: &str) -> ChatResponse {
    ChatResponse {
        choices: vec![ChatChoice {
            message: ChatMessage::assistant(content),
            finish_reason: "stop".to_string(),
        }],
        created: 1_706_000_000,
        model: "GigaChat".to_string(),
        usage: Some(TokenUsage {
            prompt_tokens: 12,
            completion_tokens: 5,
            total_tokens: 17,
        }),
    }
}

/// Lookup closure over a fixed set of variables, for `ClientConfig::from_lookup`
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}
