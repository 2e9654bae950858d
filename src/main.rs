//! GPT Relay Bot - Main Entry Point
//!
//! A Discord bot that forwards `!gpt` prompts to an OpenAI chat model
//! and posts the answer back to the channel.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gpt_relay_bot::commands::CommandRelay;
use gpt_relay_bot::completion::OpenAiClient;
use gpt_relay_bot::config::{BotSettings, Credentials};
use gpt_relay_bot::discord::DiscordBot;

/// Discord bot relaying prompts to an OpenAI chat model.
#[derive(Parser, Debug)]
#[command(name = "gpt_relay_bot")]
#[command(about = "Answer !gpt questions in Discord with an OpenAI model")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Both credentials must exist before anything connects
    let credentials = Credentials::from_env().context("FATAL ERROR: missing credentials")?;

    let settings = BotSettings::default();

    let provider = OpenAiClient::new(credentials.openai_api_key.as_str())
        .context("Failed to create OpenAI client")?;
    let relay = Arc::new(CommandRelay::new(settings.clone(), Arc::new(provider)));

    let mut bot = DiscordBot::new(&credentials.discord_token, relay)
        .await
        .context("Failed to create Discord client")?;

    info!("Starting relay bot...");
    info!("Command: {} (model: {})", settings.trigger(), settings.model);

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down...");
            shard_manager.shutdown_all().await;
        }
    });

    bot.run().await.context("Discord client stopped with an error")?;

    info!("Shut down.");
    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
