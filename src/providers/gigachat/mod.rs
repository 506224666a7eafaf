//! GigaChat provider
//!
//! Split into modules by concern:
//! - `types` - Wire request/response bodies
//! - `token` - Bearer token cache state and RqUID generation
//! - `http` - HTTP calls and status-to-error mapping
//! - `client` - The authenticated client tying them together

pub mod client;
pub mod http;
pub mod token;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::GigaChatClient;
pub use token::{TokenState, RENEWAL_BUFFER_MS};
pub use types::{AuthResponse, GigaChatMessage, GigaChatRequest};
