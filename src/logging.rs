//! Logging macros for gigachat-client
//!
//! Thin `log_*` aliases over tracing so every module logs the same way.
//! Never pass credentials or bearer tokens as fields.

pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
