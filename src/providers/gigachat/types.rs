//! GigaChat wire structures
//!
//! Request and response bodies exactly as the provider sends and expects them.

use crate::core_types::messages::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message as sent to the chat completions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigaChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<&ChatMessage> for GigaChatMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigaChatRequest {
    pub model: String,
    pub messages: Vec<GigaChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

/// OAuth token endpoint response
#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Absolute expiry, epoch milliseconds
    pub expires_at: i64,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
