//! HTTP client functionality for the GigaChat API
//!
//! Two calls: the OAuth token request and the chat completion request. Both
//! map non-success statuses to their own error variant so callers can tell a
//! credential problem from a rejected chat request.

use super::types::{AuthResponse, GigaChatRequest};
use crate::core_types::messages::ChatResponse;
use crate::error::{GigaChatError, GigaChatResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client for GigaChat endpoints
#[derive(Debug, Clone)]
pub struct GigaChatHttpClient {
    client: reqwest::Client,
}

impl GigaChatHttpClient {
    /// Create a new HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`] if the TLS backend
    /// cannot be initialized.
    pub fn new(verify_ssl: bool, timeout: Duration) -> GigaChatResult<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify_ssl)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                GigaChatError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Headers for the OAuth token request
    pub fn build_basic_headers(basic_credential: &str, rq_uid: &str) -> GigaChatResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Basic {basic_credential}")).map_err(|_| {
            GigaChatError::configuration_error("Credentials contain characters not allowed in a header")
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("rquid"),
            HeaderValue::from_str(rq_uid).map_err(|e| {
                GigaChatError::configuration_error(format!("Invalid RqUID: {e}"))
            })?,
        );

        Ok(headers)
    }

    /// Headers for an authenticated chat request
    pub fn build_bearer_headers(token: &str) -> GigaChatResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            GigaChatError::response_parsing_error("Access token contains invalid header characters")
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    /// POST the client-credentials request to the OAuth endpoint
    pub async fn request_token(
        &self,
        url: &str,
        headers: HeaderMap,
        scope: &str,
    ) -> GigaChatResult<AuthResponse> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .form(&[("scope", scope)])
            .send()
            .await
            .map_err(|e| {
                log_error!(url = %url, error = %e, "OAuth token request failed");
                GigaChatError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(GigaChatError::authentication_failed(
                status.as_u16(),
                status_text(status),
                body,
            ));
        }

        let auth: AuthResponse = parse_success_response(response).await?;

        // A token that cannot be sent back must never reach the cache
        Self::build_bearer_headers(&auth.access_token)?;

        Ok(auth)
    }

    /// POST a chat completion request with a bearer token
    pub async fn execute_chat_request(
        &self,
        url: &str,
        headers: HeaderMap,
        request: &GigaChatRequest,
    ) -> GigaChatResult<ChatResponse> {
        log_debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            "Sending GigaChat chat request"
        );

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log_error!(url = %url, error = %e, "HTTP request failed");
                GigaChatError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(GigaChatError::request_failed(
                status.as_u16(),
                status_text(status),
                body,
            ));
        }

        parse_success_response(response).await
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

async fn read_error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Read and decode a success body
async fn parse_success_response<T: DeserializeOwned>(response: reqwest::Response) -> GigaChatResult<T> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(error = %e, "Failed to read response body");
        GigaChatError::from(e)
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        GigaChatError::response_parsing_error(format!("Invalid response: {e}"))
    })
}
