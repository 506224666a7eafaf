//! Basic GigaChat example demonstrating a single chat request.
//!
//! This example shows how to:
//! - Load configuration from the environment
//! - Build a short conversation
//! - Send it and inspect the response
//!
//! # Running
//!
//! ```bash
//! export GIGACHAT_CREDENTIALS="<base64 authorization key>"
//! # or: export GIGACHAT_CLIENT_ID=... GIGACHAT_CLIENT_SECRET=...
//! RUST_LOG=gigachat_client=debug cargo run --example basic_chat
//! ```

use gigachat_client::{ChatMessage, ChatRequest, GigaChatClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = GigaChatClient::from_env()?;

    let request = ChatRequest::new(vec![
        ChatMessage::system("You are a helpful assistant. Be concise."),
        ChatMessage::user("What is the capital of France? Answer in one sentence.").stamped(),
    ]);

    println!("Sending request to GigaChat...");

    let response = client.chat(request).await?;

    println!("\nResponse: {}", response.first_content().unwrap_or_default());
    println!("Model: {}", response.model);

    if let Some(usage) = &response.usage {
        println!(
            "Tokens: {} prompt + {} completion = {} total",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
