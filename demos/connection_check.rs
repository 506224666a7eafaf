//! Check that GigaChat credentials work and print the active configuration.
//!
//! Exits with a non-zero status when no access token could be obtained.
//!
//! # Running
//!
//! ```bash
//! export GIGACHAT_CREDENTIALS="<base64 authorization key>"
//! cargo run --example connection_check
//! ```

use gigachat_client::GigaChatClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = GigaChatClient::from_env()?;

    println!("Configuration:");
    println!("{}", serde_json::to_string_pretty(&client.config())?);

    if !client.test_connection().await {
        anyhow::bail!("could not obtain a GigaChat access token");
    }

    if let Some(expires_at) = client.token_expires_at().await {
        let expires = chrono::DateTime::from_timestamp_millis(expires_at)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| expires_at.to_string());
        println!("Connected. Token valid until {}", expires);
    }

    Ok(())
}
