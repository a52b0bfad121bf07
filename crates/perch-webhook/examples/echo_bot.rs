//! Minimal bot: greet every created message.
//!
//! Run with `BOT_VERIFICATION_TOKEN=... cargo run --example echo_bot`.

use perch_core::Handler;
use perch_webhook::Bot;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    let bot = Bot::new(None)
        .on_message_created(Handler::with_payload(|payload| {
            info!("message created: {payload}");
            println!("hello!");
            Ok(())
        }))
        .on_joined(Handler::no_arg(|| {
            info!("joined a channel");
            Ok(())
        }));

    bot.run(8080).await?;
    Ok(())
}
