//! Core types shared by the client and the boundary handlers
//!
//! ## Organization
//! - `messages` - Chat messages, requests and responses
//! - `provider` - The `ChatBackend` trait

pub mod messages;
pub mod provider;

pub use messages::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, MessageRole, TokenUsage};
pub use provider::ChatBackend;
