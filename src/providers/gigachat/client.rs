//! Authenticated GigaChat client
//!
//! Owns the configuration and the cached bearer token. Every chat call first
//! makes sure a usable token is cached, fetching a new one through the OAuth
//! client-credentials flow when the cached one is missing or within
//! [`RENEWAL_BUFFER_MS`] of expiry.
//!
//! ## Concurrency
//!
//! The token cache sits behind an async `RwLock` that is never held across a
//! network call. Concurrent callers that find the token expired each fetch a
//! new one; whichever response lands last becomes the cached token.

use super::http::GigaChatHttpClient;
use super::token::{new_rq_uid, now_millis, TokenState, RENEWAL_BUFFER_MS};
use super::types::{GigaChatMessage, GigaChatRequest};
use crate::config::{ClientConfig, PublicConfig};
use crate::core_types::messages::{ChatRequest, ChatResponse};
use crate::core_types::provider::ChatBackend;
use crate::error::GigaChatResult;
use crate::logging::{log_debug, log_info, log_warn};
use std::time::Instant;
use tokio::sync::RwLock;

/// GigaChat API client with OAuth token caching.
///
/// Build one per process and share it (by reference or `Arc`); building a new
/// client discards the cached token.
///
/// ```rust,no_run
/// use gigachat_client::{ChatMessage, ChatRequest, GigaChatClient};
///
/// # async fn example() -> gigachat_client::GigaChatResult<()> {
/// let client = GigaChatClient::from_env()?;
/// let response = client
///     .chat(ChatRequest::new(vec![ChatMessage::user("Hello")]))
///     .await?;
/// println!("{}", response.first_content().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GigaChatClient {
    http_client: GigaChatHttpClient,
    config: ClientConfig,
    token_url: String,
    chat_url: String,
    token: RwLock<TokenState>,
}

impl GigaChatClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`](crate::GigaChatError::ConfigurationError) if:
    /// - Credential fields are missing or blank
    /// - The base URL or auth base URL is malformed
    /// - HTTP client initialization fails
    pub fn new(config: ClientConfig) -> GigaChatResult<Self> {
        config.validate()?;

        let token_url = config.token_url()?;
        let chat_url = config.chat_url()?;

        if !config.verify_ssl {
            log_warn!(
                base_url = %config.base_url,
                "TLS certificate verification is disabled for GigaChat requests"
            );
        }

        let http_client = GigaChatHttpClient::new(config.verify_ssl, config.request_timeout)?;

        log_debug!(
            base_url = %config.base_url,
            token_url = %token_url,
            default_model = %config.default_model,
            default_temperature = config.default_params.temperature,
            default_max_tokens = config.default_params.max_tokens,
            "GigaChat client initialized"
        );

        Ok(Self {
            http_client,
            config,
            token_url,
            chat_url,
            token: RwLock::new(TokenState::default()),
        })
    }

    /// Create a client using environment variables for configuration
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`](crate::GigaChatError::ConfigurationError)
    /// if the environment lacks credentials or holds invalid values.
    pub fn from_env() -> GigaChatResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Return a usable bearer token, fetching a new one if needed.
    ///
    /// Leaves the cached state untouched when the fetch fails.
    async fn access_token(&self) -> GigaChatResult<String> {
        if let Some(token) = self.token.read().await.usable_at(now_millis()) {
            return Ok(token.to_string());
        }

        let rq_uid = new_rq_uid();
        let headers = GigaChatHttpClient::build_basic_headers(
            &self.config.credentials.basic_auth_value(),
            &rq_uid,
        )?;

        log_debug!(rq_uid = %rq_uid, url = %self.token_url, "Requesting GigaChat access token");

        let auth = self
            .http_client
            .request_token(&self.token_url, headers, &self.config.scope)
            .await?;

        let remaining_ms = auth.expires_at.saturating_sub(now_millis());
        if remaining_ms <= RENEWAL_BUFFER_MS {
            log_warn!(
                rq_uid = %rq_uid,
                remaining_ms = remaining_ms,
                "Fresh GigaChat token expires within the renewal buffer"
            );
        }

        *self.token.write().await = TokenState::new(auth.access_token.clone(), auth.expires_at);

        log_info!(
            rq_uid = %rq_uid,
            expires_at = auth.expires_at,
            "GigaChat access token refreshed"
        );

        Ok(auth.access_token)
    }

    /// Build the wire request, filling gaps from the configured defaults
    pub(crate) fn build_chat_body(&self, request: &ChatRequest) -> GigaChatRequest {
        if request.stream == Some(true) {
            log_warn!("Streaming is not supported; sending a regular chat request");
        }

        let model = request
            .model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.config.default_model)
            .to_string();

        GigaChatRequest {
            model,
            messages: request.messages.iter().map(GigaChatMessage::from).collect(),
            temperature: request
                .temperature
                .unwrap_or(self.config.default_params.temperature),
            max_tokens: request
                .max_tokens
                .unwrap_or(self.config.default_params.max_tokens),
            stream: false,
        }
    }

    /// Send a chat completion request
    ///
    /// # Errors
    ///
    /// - `AuthenticationFailed` if a token was needed and the OAuth endpoint
    ///   refused it
    /// - `RequestFailed` if the chat endpoint returned a non-success status
    /// - `NetworkError` on transport failure
    /// - `ResponseParsingError` if a success body could not be decoded
    pub async fn chat(&self, request: ChatRequest) -> GigaChatResult<ChatResponse> {
        let token = self.access_token().await?;
        let body = self.build_chat_body(&request);
        let headers = GigaChatHttpClient::build_bearer_headers(&token)?;

        let start_time = Instant::now();
        let response = self
            .http_client
            .execute_chat_request(&self.chat_url, headers, &body)
            .await?;

        log_debug!(
            model = %response.model,
            choices = response.choices.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "GigaChat chat request completed"
        );

        Ok(response)
    }

    /// Check that a token can be obtained. Never fails.
    pub async fn test_connection(&self) -> bool {
        match self.access_token().await {
            Ok(_) => true,
            Err(e) => {
                log_warn!(error = %e, "GigaChat connection test failed");
                false
            }
        }
    }

    /// Configuration snapshot without credentials or the cached token
    pub fn config(&self) -> PublicConfig {
        self.config.public()
    }

    /// Expiry (epoch ms) of the cached token, if one was ever fetched.
    ///
    /// The token itself is never exposed.
    pub async fn token_expires_at(&self) -> Option<i64> {
        self.token.read().await.expires_at()
    }
}

#[async_trait::async_trait]
impl ChatBackend for GigaChatClient {
    async fn chat(&self, request: ChatRequest) -> GigaChatResult<ChatResponse> {
        GigaChatClient::chat(self, request).await
    }

    async fn test_connection(&self) -> bool {
        GigaChatClient::test_connection(self).await
    }

    fn public_config(&self) -> PublicConfig {
        self.config()
    }

    fn backend_name(&self) -> &'static str {
        "gigachat"
    }
}
