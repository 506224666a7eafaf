//! Boundary handlers for a chat web frontend
//!
//! Framework-agnostic request handling for the three endpoints a chat UI
//! needs: chat completion, configuration read, and connection test. Each
//! handler returns an [`ApiResponse`] that any HTTP router can turn into its
//! own response type.
//!
//! Status mapping:
//! - chat: 400 for invalid input (no backend call is made), 500 for any
//!   backend failure, 200 otherwise
//! - connection test: always 200, the outcome is in the `connected` field

use crate::core_types::messages::ChatRequest;
use crate::core_types::provider::ChatBackend;
use crate::error::{GigaChatError, GigaChatResult};
use crate::logging::log_error;
use reqwest::StatusCode;
use serde_json::{json, Value};

const INVALID_CHAT_REQUEST: &str = "Invalid request: messages array is required";

/// Response produced by a boundary handler
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, &'static str)>,
    /// JSON body, `None` for empty responses
    pub body: Option<Value>,
}

impl ApiResponse {
    fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", "application/json")],
            body: Some(body),
        }
    }
}

/// Parse and validate a raw chat request body
///
/// # Errors
///
/// Returns [`GigaChatError::ValidationError`] if the body is not JSON, has no
/// `messages` array, has an empty one, or does not match [`ChatRequest`].
pub fn validate_chat_request(raw_body: &str) -> GigaChatResult<ChatRequest> {
    let value: Value = serde_json::from_str(raw_body)
        .map_err(|e| GigaChatError::validation_error(format!("body is not valid JSON: {e}")))?;

    match value.get("messages").and_then(Value::as_array) {
        Some(messages) if !messages.is_empty() => {}
        _ => return Err(GigaChatError::validation_error("messages array is required")),
    }

    serde_json::from_value(value)
        .map_err(|e| GigaChatError::validation_error(format!("malformed chat request: {e}")))
}

/// Handle `POST /api/chat`
pub async fn handle_chat<B>(backend: &B, raw_body: &str) -> ApiResponse
where
    B: ChatBackend + ?Sized,
{
    let request = match validate_chat_request(raw_body) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::json(
                StatusCode::BAD_REQUEST,
                json!({ "error": INVALID_CHAT_REQUEST, "details": e.to_string() }),
            );
        }
    };

    match backend.chat(request).await {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(body) => ApiResponse::json(StatusCode::OK, body),
            Err(e) => internal_error("Failed to process chat request", &e.to_string()),
        },
        Err(e) => {
            log_error!(backend = backend.backend_name(), error = %e, "Error in chat API");
            internal_error("Failed to process chat request", &e.to_string())
        }
    }
}

/// Handle `GET /api/config`
pub fn handle_get_config<B>(backend: &B) -> ApiResponse
where
    B: ChatBackend + ?Sized,
{
    match serde_json::to_value(backend.public_config()) {
        Ok(config) => ApiResponse::json(StatusCode::OK, json!({ "success": true, "config": config })),
        Err(e) => internal_error("Failed to retrieve configuration", &e.to_string()),
    }
}

/// Handle `POST /api/config` (connection test)
pub async fn handle_test_connection<B>(backend: &B) -> ApiResponse
where
    B: ChatBackend + ?Sized,
{
    let connected = backend.test_connection().await;
    ApiResponse::json(
        StatusCode::OK,
        json!({ "success": true, "connected": connected }),
    )
}

/// Handle `OPTIONS /api/chat` (CORS preflight)
pub fn handle_chat_preflight() -> ApiResponse {
    ApiResponse {
        status: StatusCode::OK,
        headers: vec![
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ],
        body: None,
    }
}

fn internal_error(error: &str, details: &str) -> ApiResponse {
    ApiResponse::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": error, "details": details }),
    )
}
