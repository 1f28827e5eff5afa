//! Example: streaming chat turn
//!
//! Sends one message to the marketplace chat assistant and prints the
//! reply as it streams in.
//!
//! ## Usage
//!
//! Set your gateway credentials:
//! ```bash
//! export IDEAMARKET_API_KEY=pk-...
//! export IDEAMARKET_GATEWAY_URL=https://<project>.functions.ideamarket.app/v1
//! ```
//!
//! Run the example:
//! ```bash
//! cargo run --example streaming
//! ```

use ideamarket_ai::services::chat::ChatRequest;
use ideamarket_ai::{AssistantClientBuilder, AssistantConfig, ChatMessage};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AssistantConfig::from_env()?;
    let client = AssistantClientBuilder::new().with_config(config).build()?;

    let request = ChatRequest::from_history(&[ChatMessage::user(
        "Suggest three startup ideas in sustainable logistics. Keep it brief.",
    )]);

    println!("Streaming reply from the idea assistant...\n");
    print!("Assistant: ");

    let stream = client.chat().send_stream(request).await?;
    stream
        .for_each_delta(|delta| {
            print!("{}", delta);
            let _ = std::io::stdout().flush();
        })
        .await?;

    println!("\n\nDone.");

    Ok(())
}
