// Unit Tests for GigaChat Client Configuration
//
// UNIT UNDER TEST: ClientConfig, Credentials, PublicConfig
//
// BUSINESS RESPONSIBILITY:
//   - Loads configuration from GIGACHAT_* environment variables
//   - Fails fast when credentials are missing
//   - Applies defaults (model GigaChat, temperature 0.7, max tokens 1024)
//   - Encodes Basic credentials for both credential modes
//   - Derives the OAuth and chat endpoint URLs
//   - Exposes a public snapshot that never contains secret material
//
// TEST COVERAGE:
//   - Environment parsing for both credential modes
//   - Missing and blank credential handling
//   - Default application and invalid optional values
//   - Endpoint derivation with and without an auth base override
//   - Redaction in Debug output and the public snapshot

use crate::config::{ClientConfig, Credentials, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SCOPE};
use crate::error::GigaChatError;
use crate::tests::helpers::{
    create_test_config, lookup_from, TEST_AUTH_KEY, TEST_CLIENT_ID, TEST_CLIENT_SECRET,
};

#[cfg(test)]
mod credentials_tests {
    use super::*;

    #[test]
    fn test_client_pair_is_base64_encoded() {
        // "id:secret" base64-encoded
        let credentials = Credentials::client_pair("id", "secret");

        assert_eq!(credentials.basic_auth_value(), "aWQ6c2VjcmV0");
    }

    #[test]
    fn test_authorization_key_is_sent_verbatim() {
        let credentials = Credentials::authorization_key(TEST_AUTH_KEY);

        assert_eq!(credentials.basic_auth_value(), TEST_AUTH_KEY);
    }

    #[test]
    fn test_blank_credentials_fail_validation() {
        let cases = [
            Credentials::authorization_key("   "),
            Credentials::client_pair("", "secret"),
            Credentials::client_pair("id", ""),
        ];

        for credentials in cases {
            let result = credentials.validate();
            assert!(
                matches!(result, Err(GigaChatError::ConfigurationError { .. })),
                "Blank credentials should be rejected: {:?}",
                credentials
            );
        }
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let pair = Credentials::client_pair(TEST_CLIENT_ID, TEST_CLIENT_SECRET);
        let key = Credentials::authorization_key(TEST_AUTH_KEY);

        let pair_debug = format!("{:?}", pair);
        let key_debug = format!("{:?}", key);

        assert!(!pair_debug.contains(TEST_CLIENT_SECRET));
        assert!(!key_debug.contains(TEST_AUTH_KEY));
        assert!(pair_debug.contains("REDACTED"));
    }
}

#[cfg(test)]
mod client_config_tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = create_test_config();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.scope, DEFAULT_SCOPE);
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.default_params.temperature, 0.7);
        assert_eq!(config.default_params.max_tokens, 1024);
        assert!(config.verify_ssl, "TLS verification must default to on");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_url_derived_from_base_url_host() {
        let config = create_test_config();

        assert_eq!(
            config.token_url().unwrap(),
            "https://gigachat.devices.sberbank.ru/api/v2/oauth"
        );
        assert_eq!(
            config.chat_url().unwrap(),
            "https://gigachat.devices.sberbank.ru/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_token_url_uses_auth_base_override() {
        let mut config = create_test_config();
        config.auth_base_url = Some("https://ngw.devices.sberbank.ru:9443/".to_string());

        assert_eq!(
            config.token_url().unwrap(),
            "https://ngw.devices.sberbank.ru:9443/api/v2/oauth"
        );
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let mut config = create_test_config();
        config.base_url = "not a url".to_string();

        assert!(matches!(
            config.validate(),
            Err(GigaChatError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_invalid_default_params_fail_validation() {
        let mut negative_temp = create_test_config();
        negative_temp.default_params.temperature = -0.1;
        let mut zero_tokens = create_test_config();
        zero_tokens.default_params.max_tokens = 0;

        assert!(negative_temp.validate().is_err());
        assert!(zero_tokens.validate().is_err());
    }

    #[test]
    fn test_public_config_never_contains_secrets() {
        // The public snapshot is reachable from an unauthenticated endpoint

        let mut config = ClientConfig::new(Credentials::authorization_key(TEST_AUTH_KEY));
        config.default_model = "GigaChat-Pro".to_string();

        let json = serde_json::to_string(&config.public()).unwrap();

        assert!(!json.contains(TEST_AUTH_KEY));
        assert!(json.contains("\"baseUrl\""));
        assert!(json.contains("\"verifySSL\":true"));
        assert!(json.contains("\"model\":\"GigaChat-Pro\""));
        assert!(json.contains("\"maxTokens\":1024"));
    }
}

#[cfg(test)]
mod from_lookup_tests {
    use super::*;

    #[test]
    fn test_authorization_key_mode() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("GIGACHAT_CREDENTIALS", TEST_AUTH_KEY)]))
                .unwrap();

        assert_eq!(config.credentials, Credentials::authorization_key(TEST_AUTH_KEY));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.verify_ssl);
    }

    #[test]
    fn test_client_pair_mode() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GIGACHAT_CLIENT_ID", TEST_CLIENT_ID),
            ("GIGACHAT_CLIENT_SECRET", TEST_CLIENT_SECRET),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials,
            Credentials::client_pair(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
        );
    }

    #[test]
    fn test_authorization_key_wins_over_pair() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GIGACHAT_CREDENTIALS", TEST_AUTH_KEY),
            ("GIGACHAT_CLIENT_ID", TEST_CLIENT_ID),
            ("GIGACHAT_CLIENT_SECRET", TEST_CLIENT_SECRET),
        ]))
        .unwrap();

        assert!(matches!(config.credentials, Credentials::AuthorizationKey(_)));
    }

    #[test]
    fn test_missing_credentials_fail_fast() {
        let result = ClientConfig::from_lookup(lookup_from(&[(
            "GIGACHAT_BASE_URL",
            "https://example.com/api/v1",
        )]));

        match result {
            Err(GigaChatError::ConfigurationError { message }) => {
                assert!(message.contains("GIGACHAT_CREDENTIALS"));
            }
            other => panic!("Expected ConfigurationError, got: {:?}", other),
        }
    }

    #[test]
    fn test_half_a_client_pair_is_missing_credentials() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[("GIGACHAT_CLIENT_ID", TEST_CLIENT_ID)]));

        assert!(matches!(
            result,
            Err(GigaChatError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_empty_credentials_variable_counts_as_missing() {
        let result = ClientConfig::from_lookup(lookup_from(&[("GIGACHAT_CREDENTIALS", "")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_optional_overrides_are_applied() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GIGACHAT_CREDENTIALS", TEST_AUTH_KEY),
            ("GIGACHAT_BASE_URL", "https://custom.example.com/api/v1"),
            ("GIGACHAT_AUTH_URL", "https://auth.example.com"),
            ("GIGACHAT_SCOPE", "GIGACHAT_API_CORP"),
            ("GIGACHAT_VERIFY_SSL_CERTS", "false"),
            ("GIGACHAT_MODEL", "GigaChat-Max"),
            ("GIGACHAT_TEMPERATURE", "0.2"),
            ("GIGACHAT_MAX_TOKENS", "512"),
            ("GIGACHAT_TIMEOUT", "15"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://custom.example.com/api/v1");
        assert_eq!(
            config.token_url().unwrap(),
            "https://auth.example.com/api/v2/oauth"
        );
        assert_eq!(config.scope, "GIGACHAT_API_CORP");
        assert!(!config.verify_ssl);
        assert_eq!(config.default_model, "GigaChat-Max");
        assert_eq!(config.default_params.temperature, 0.2);
        assert_eq!(config.default_params.max_tokens, 512);
        assert_eq!(config.request_timeout, std::time::Duration::from_secs(15));
    }

    #[test]
    fn test_verify_ssl_only_disabled_by_literal_false() {
        for value in ["true", "0", "no", "FALSE"] {
            let config = ClientConfig::from_lookup(lookup_from(&[
                ("GIGACHAT_CREDENTIALS", TEST_AUTH_KEY),
                ("GIGACHAT_VERIFY_SSL_CERTS", value),
            ]))
            .unwrap();

            assert!(config.verify_ssl, "'{}' must not disable TLS checks", value);
        }
    }

    #[test]
    fn test_unparseable_numbers_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GIGACHAT_CREDENTIALS", TEST_AUTH_KEY),
            ("GIGACHAT_TEMPERATURE", "warm"),
            ("GIGACHAT_MAX_TOKENS", "-5"),
        ]))
        .unwrap();

        assert_eq!(config.default_params.temperature, 0.7);
        assert_eq!(config.default_params.max_tokens, 1024);
    }
}

#[cfg(test)]
mod from_env_tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "GIGACHAT_CREDENTIALS",
        "GIGACHAT_CLIENT_ID",
        "GIGACHAT_CLIENT_SECRET",
        "GIGACHAT_MODEL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        // Arrange
        clear_env();
        std::env::set_var("GIGACHAT_CLIENT_ID", TEST_CLIENT_ID);
        std::env::set_var("GIGACHAT_CLIENT_SECRET", TEST_CLIENT_SECRET);
        std::env::set_var("GIGACHAT_MODEL", "GigaChat-Pro");

        // Act
        let result = ClientConfig::from_env();

        // Assert
        let config = result.expect("config should load from env");
        assert_eq!(config.default_model, "GigaChat-Pro");
        assert!(matches!(config.credentials, Credentials::ClientPair { .. }));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_without_credentials_fails() {
        clear_env();

        let result = ClientConfig::from_env();

        assert!(matches!(
            result,
            Err(GigaChatError::ConfigurationError { .. })
        ));
    }
}
