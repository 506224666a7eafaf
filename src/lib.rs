//! # gigachat-client
//!
//! Authenticated client for the GigaChat chat completion API.
//!
//! ## Key Features
//!
//! - **OAuth client credentials**: authorization-key or client id/secret pair
//! - **Token caching**: bearer tokens are reused until 60 s before expiry,
//!   then renewed transparently
//! - **Typed errors**: authentication, request, network and configuration
//!   failures stay distinguishable
//! - **Redacted config**: [`PublicConfig`] carries no secret material
//! - **Boundary handlers**: framework-agnostic validation and status mapping
//!   in [`api`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use gigachat_client::{ChatMessage, ChatRequest, ClientConfig, Credentials, GigaChatClient};
//!
//! # async fn example() -> gigachat_client::GigaChatResult<()> {
//! let config = ClientConfig::new(Credentials::client_pair("client-id", "client-secret"));
//! let client = GigaChatClient::new(config)?;
//!
//! let request = ChatRequest::new(vec![
//!     ChatMessage::system("You are a helpful assistant."),
//!     ChatMessage::user("Hello!"),
//! ]);
//! let response = client.chat(request).await?;
//! println!("{}", response.first_content().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod api;
pub mod config;
pub mod error;
pub mod providers;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ClientConfig, Credentials, DefaultChatParams, PublicConfig, Secret};
pub use core_types::{
    ChatBackend, ChatChoice, ChatMessage, ChatRequest, ChatResponse, MessageRole, TokenUsage,
};
pub use error::{GigaChatError, GigaChatResult};
pub use providers::GigaChatClient;
