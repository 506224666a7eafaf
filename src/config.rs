use crate::error::{GigaChatError, GigaChatResult};
use crate::logging::{log_debug, log_warn};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default API base URL for the public GigaChat endpoint.
pub const DEFAULT_BASE_URL: &str = "https://gigachat.devices.sberbank.ru/api/v1";
/// OAuth scope for personal-use API access.
pub const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";
pub const DEFAULT_MODEL: &str = "GigaChat";
/// Path of the OAuth token endpoint, relative to the auth base URL.
pub const OAUTH_PATH: &str = "/api/v2/oauth";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Secret string that never shows up in `Debug` output and cannot be
/// serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret value. Only the auth request builder should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// Credential material for the OAuth client-credentials flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-encoded authorization key, sent as the Basic credential verbatim.
    AuthorizationKey(Secret),
    /// Client id and secret pair, encoded as `base64(id:secret)`.
    ClientPair { client_id: String, client_secret: Secret },
}

impl Credentials {
    pub fn authorization_key(key: impl Into<String>) -> Self {
        Self::AuthorizationKey(Secret::new(key))
    }

    pub fn client_pair(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::ClientPair {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret),
        }
    }

    /// Value for the `Authorization: Basic <value>` header.
    pub fn basic_auth_value(&self) -> String {
        match self {
            Self::AuthorizationKey(key) => key.expose().trim().to_string(),
            Self::ClientPair {
                client_id,
                client_secret,
            } => B64.encode(format!("{}:{}", client_id, client_secret.expose())),
        }
    }

    /// Check that every required field is present and non-blank
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`] naming the missing field.
    pub fn validate(&self) -> GigaChatResult<()> {
        match self {
            Self::AuthorizationKey(key) if key.is_blank() => Err(
                GigaChatError::configuration_error("GigaChat authorization key is empty"),
            ),
            Self::ClientPair { client_id, .. } if client_id.trim().is_empty() => Err(
                GigaChatError::configuration_error("GigaChat client id is empty"),
            ),
            Self::ClientPair { client_secret, .. } if client_secret.is_blank() => Err(
                GigaChatError::configuration_error("GigaChat client secret is empty"),
            ),
            _ => Ok(()),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::AuthorizationKey(_) => "authorization_key",
            Self::ClientPair { .. } => "client_pair",
        }
    }
}

/// Model parameters applied when a request does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultChatParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for DefaultChatParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Full client configuration, immutable once the client is built.
///
/// Not `Serialize` since it holds credentials. Use
/// [`ClientConfig::public`] for anything that leaves the process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub base_url: String,
    /// Auth base URL; the OAuth path is appended to it. Defaults to the
    /// scheme and host of `base_url`.
    pub auth_base_url: Option<String>,
    pub scope: String,
    /// `false` disables TLS certificate verification. Opt-out only.
    pub verify_ssl: bool,
    pub default_model: String,
    pub default_params: DefaultChatParams,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with defaults for everything except the credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_base_url: None,
            scope: DEFAULT_SCOPE.to_string(),
            verify_ssl: true,
            default_model: DEFAULT_MODEL.to_string(),
            default_params: DefaultChatParams::default(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`] if:
    /// - Credential fields are missing or blank
    /// - The base URL or auth base URL does not parse
    /// - The default temperature is negative or not finite
    /// - The default max-token count is zero
    pub fn validate(&self) -> GigaChatResult<()> {
        self.credentials.validate()?;
        self.token_url()?;
        self.chat_url()?;

        if !self.default_params.temperature.is_finite() || self.default_params.temperature < 0.0 {
            return Err(GigaChatError::configuration_error(format!(
                "Invalid default temperature: {}",
                self.default_params.temperature
            )));
        }
        if self.default_params.max_tokens == 0 {
            return Err(GigaChatError::configuration_error(
                "Default max_tokens must be greater than zero",
            ));
        }
        if self.scope.trim().is_empty() {
            return Err(GigaChatError::configuration_error("OAuth scope is empty"));
        }
        Ok(())
    }

    /// Full URL of the OAuth token endpoint
    pub fn token_url(&self) -> GigaChatResult<String> {
        let auth_base = match &self.auth_base_url {
            Some(url) => parse_url(url, "auth base URL")?
                .as_str()
                .trim_end_matches('/')
                .to_string(),
            None => parse_url(&self.base_url, "base URL")?
                .origin()
                .ascii_serialization(),
        };
        Ok(format!("{auth_base}{OAUTH_PATH}"))
    }

    /// Full URL of the chat completions endpoint
    pub fn chat_url(&self) -> GigaChatResult<String> {
        let base = parse_url(&self.base_url, "base URL")?;
        Ok(format!(
            "{}/chat/completions",
            base.as_str().trim_end_matches('/')
        ))
    }

    /// Snapshot safe to expose on a public status endpoint
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            base_url: self.base_url.clone(),
            verify_ssl: self.verify_ssl,
            model: self.default_model.clone(),
            temperature: self.default_params.temperature,
            max_tokens: self.default_params.max_tokens,
        }
    }

    /// Load configuration from environment variables
    /// This is the ONLY method that reads the process environment
    ///
    /// # Errors
    ///
    /// Returns [`GigaChatError::ConfigurationError`] if neither
    /// `GIGACHAT_CREDENTIALS` nor the `GIGACHAT_CLIENT_ID` /
    /// `GIGACHAT_CLIENT_SECRET` pair is set, or if validation fails.
    pub fn from_env() -> GigaChatResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup using the
    /// `GIGACHAT_*` variable names
    pub fn from_lookup<F>(lookup: F) -> GigaChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = if let Some(key) = get("GIGACHAT_CREDENTIALS") {
            Credentials::authorization_key(key)
        } else {
            match (get("GIGACHAT_CLIENT_ID"), get("GIGACHAT_CLIENT_SECRET")) {
                (Some(id), Some(secret)) => Credentials::client_pair(id, secret),
                _ => {
                    return Err(GigaChatError::configuration_error(
                        "GIGACHAT_CREDENTIALS environment variable is not set \
                         (or GIGACHAT_CLIENT_ID and GIGACHAT_CLIENT_SECRET)",
                    ));
                }
            }
        };

        let mut config = Self::new(credentials);
        if let Some(url) = get("GIGACHAT_BASE_URL") {
            config.base_url = url;
        }
        config.auth_base_url = get("GIGACHAT_AUTH_URL");
        if let Some(scope) = get("GIGACHAT_SCOPE") {
            config.scope = scope;
        }
        config.verify_ssl = get("GIGACHAT_VERIFY_SSL_CERTS").as_deref() != Some("false");
        if let Some(model) = get("GIGACHAT_MODEL") {
            config.default_model = model;
        }
        if let Some(temp) = parse_param::<f64>(&get, "GIGACHAT_TEMPERATURE") {
            config.default_params.temperature = temp;
        }
        if let Some(max_tokens) = parse_param::<u32>(&get, "GIGACHAT_MAX_TOKENS") {
            config.default_params.max_tokens = max_tokens;
        }
        if let Some(secs) = parse_param::<u64>(&get, "GIGACHAT_TIMEOUT") {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;

        log_debug!(
            credential_mode = config.credentials.mode(),
            base_url = %config.base_url,
            verify_ssl = config.verify_ssl,
            model = %config.default_model,
            "GigaChat configuration loaded and validated"
        );

        Ok(config)
    }
}

/// Parse an optional parameter, keeping the default when it is malformed
fn parse_param<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = get(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log_warn!(variable = key, value = %raw, "Ignoring unparseable configuration value");
            None
        }
    }
}

fn parse_url(raw: &str, what: &str) -> GigaChatResult<Url> {
    Url::parse(raw)
        .map_err(|e| GigaChatError::configuration_error(format!("Invalid {what} '{raw}': {e}")))
}

/// Redacted view of [`ClientConfig`].
///
/// Has no field that could hold credentials or the cached token, so it can be
/// returned from public endpoints as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub base_url: String,
    #[serde(rename = "verifySSL")]
    pub verify_ssl: bool,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}
