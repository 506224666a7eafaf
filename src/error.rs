//! Error types for GigaChat client operations.
//!
//! Every failure the client can surface is a [`GigaChatError`] variant. The
//! taxonomy keeps failures with different remediations apart:
//!
//! - Configuration errors (missing credentials, unparseable URLs)
//! - Validation errors (malformed caller input, raised at the boundary)
//! - Authentication failures (the OAuth endpoint rejected the credentials)
//! - Request failures (the chat endpoint rejected an authenticated request)
//! - Network failures (DNS, TLS, connect, timeout)
//! - Response parsing failures (success status, undecodable body)
//!
//! No variant ever carries credential material or a bearer token.
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use gigachat_client::{GigaChatError, error::ErrorCategory};
//!
//! fn handle_error(err: GigaChatError) {
//!     match err.category() {
//!         ErrorCategory::Client => println!("Fix the configuration: {}", err),
//!         ErrorCategory::Transient => println!("Check connectivity: {}", err),
//!         ErrorCategory::External => println!("Provider issue: {}", err),
//!     }
//!     println!("Tell user: {}", err.user_message());
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider answered with a failure or an unexpected payload.
    External,

    /// The caller or operator made a mistake they can fix (credentials,
    /// configuration, input).
    Client,

    /// Connectivity problems that may clear up on their own.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// System is unusable until an operator intervenes.
    Critical,

    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,

    /// Expected failure, such as rejected user input.
    Info,
}

// ============================================================================
// Client error types
// ============================================================================

/// Convenient result type for client operations.
pub type GigaChatResult<T> = std::result::Result<T, GigaChatError>;

/// Errors that can occur while talking to the GigaChat API.
///
/// Use the constructor methods, which log the error once at creation:
///
/// ```rust
/// use gigachat_client::GigaChatError;
///
/// let err = GigaChatError::configuration_error("GIGACHAT_CREDENTIALS is not set");
/// let err = GigaChatError::validation_error("messages array is required");
/// ```
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ConfigurationError` | Client | No |
/// | `ValidationError` | Client | No |
/// | `AuthenticationFailed` | Client | No |
/// | `RequestFailed` | External | 5xx only |
/// | `NetworkError` | Transient | Yes |
/// | `ResponseParsingError` | External | No |
#[derive(Error, Debug)]
pub enum GigaChatError {
    /// Client configuration is invalid or incomplete.
    ///
    /// Raised at construction time; nothing can succeed until an operator
    /// fixes the configuration.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// Caller input was rejected before any network call was made.
    #[error("Validation failed: {message}")]
    ValidationError {
        /// What was wrong with the input.
        message: String,
    },

    /// The OAuth endpoint returned a non-success status.
    #[error("Authentication failed: {status} {status_text} - {body}")]
    AuthenticationFailed {
        /// HTTP status code returned by the OAuth endpoint.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The chat endpoint returned a non-success status after successful
    /// authentication.
    #[error("Chat request failed: {status} {status_text} - {body}")]
    RequestFailed {
        /// HTTP status code returned by the chat endpoint.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The request never produced an HTTP response (DNS, TLS, connect,
    /// timeout).
    #[error("Network error: {message}")]
    NetworkError {
        /// Description of the transport failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider answered with a success status but the body could not be
    /// decoded.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },
}

impl GigaChatError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::ValidationError { .. } => ErrorCategory::Client,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::NetworkError { .. } => ErrorCategory::Transient,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Critical,
            Self::ValidationError { .. } => ErrorSeverity::Info,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::NetworkError { .. } => ErrorSeverity::Warning,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client itself never retries; this is a hint for callers that
    /// implement their own policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::RequestFailed { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status returned by the provider, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status, .. } | Self::RequestFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Convert to a user-friendly message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::ValidationError { message } => format!("Invalid request: {message}"),
            Self::AuthenticationFailed { .. } => {
                "Authentication failed. Please check your credentials".to_string()
            }
            Self::RequestFailed { .. } => {
                "The AI service rejected the request. Please try again".to_string()
            }
            Self::NetworkError { .. } => {
                "Unable to reach the AI service. Please check your connection".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from AI service".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "GigaChat client configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "validation_error",
            message = %message,
            "Chat request rejected at the boundary"
        );
        Self::ValidationError { message }
    }

    pub fn authentication_failed(
        status: u16,
        status_text: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let status_text = status_text.into();
        let body = body.into();
        log_error!(
            error_type = "authentication_failed",
            status = status,
            status_text = %status_text,
            body = %body,
            "GigaChat OAuth endpoint rejected the credentials"
        );
        Self::AuthenticationFailed {
            status,
            status_text,
            body,
        }
    }

    pub fn request_failed(
        status: u16,
        status_text: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let status_text = status_text.into();
        let body = body.into();
        log_error!(
            error_type = "request_failed",
            status = status,
            status_text = %status_text,
            body = %body,
            "GigaChat chat request failed"
        );
        Self::RequestFailed {
            status,
            status_text,
            body,
        }
    }

    pub fn network_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "network_error",
            message = %message,
            has_source = source.is_some(),
            "GigaChat transport failure"
        );
        Self::NetworkError { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "GigaChat response format invalid"
        );
        Self::ResponseParsingError { message }
    }
}

impl From<reqwest::Error> for GigaChatError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::network_error(message, Some(Box::new(err)))
    }
}
