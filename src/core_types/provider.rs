//! Backend trait for chat completion services
//!
//! Defines the [`ChatBackend`] contract shared by every chat implementation,
//! so the boundary handlers can be driven by the GigaChat client or by any
//! interchangeable backend.

use crate::config::PublicConfig;
use crate::core_types::messages::{ChatRequest, ChatResponse};
use crate::error::GigaChatResult;

/// Trait for chat backends to implement
///
/// Implementations are shared across concurrent requests, so they must be
/// `Send + Sync` and keep any mutable state behind their own synchronization.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a chat completion request
    ///
    /// The caller is responsible for rejecting empty message lists before
    /// calling this.
    async fn chat(&self, request: ChatRequest) -> GigaChatResult<ChatResponse>;

    /// Check whether the backend can authenticate. Never fails; any error
    /// becomes `false`.
    async fn test_connection(&self) -> bool;

    /// Configuration snapshot without secret material
    fn public_config(&self) -> PublicConfig;

    /// Backend name for logging and debugging
    fn backend_name(&self) -> &'static str;
}
