//! Bearer token cache state

use std::fmt;

/// Safety margin subtracted from the expiry so a token is never used when it
/// could lapse mid-request.
pub const RENEWAL_BUFFER_MS: i64 = 60_000;

/// Cached bearer token and its absolute expiry.
///
/// `expires_at` is epoch milliseconds, 0 until a token has been fetched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenState {
    access_token: Option<String>,
    expires_at: i64,
}

impl TokenState {
    pub fn new(access_token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            access_token: Some(access_token.into()),
            expires_at,
        }
    }

    /// The cached token, if it stays valid past the renewal buffer at `now_ms`
    pub fn usable_at(&self, now_ms: i64) -> Option<&str> {
        let token = self.access_token.as_deref()?;
        (now_ms < self.expires_at.saturating_sub(RENEWAL_BUFFER_MS)).then_some(token)
    }

    /// Expiry of the cached token, whether or not it is still usable
    pub fn expires_at(&self) -> Option<i64> {
        self.access_token.as_ref().map(|_| self.expires_at)
    }
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Fresh correlation id for the `RqUID` header
pub fn new_rq_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
