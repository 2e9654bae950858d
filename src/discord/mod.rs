//! Discord client wrapper module.
//!
//! Connects to the Discord gateway, sets the bot's presence and feeds
//! command messages to the relay.

mod client;

pub use client::{ChannelReplySink, DiscordBot, DiscordError, RelayEventHandler, intents};
