//! Chat backend implementations
//!
//! - **gigachat**: GigaChat provider with OAuth client-credentials auth
//!
//! Other backends plug in by implementing
//! [`ChatBackend`](crate::core_types::ChatBackend).

pub mod gigachat;

pub use gigachat::GigaChatClient;
