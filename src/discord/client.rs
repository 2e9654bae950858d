//! Discord gateway wrapper built on serenity.

use std::sync::Arc;

use serenity::all::{
    ActivityData, ChannelId, Client, Context, EventHandler, GatewayIntents, Http, Message, Ready,
    ShardManager,
};
use serenity::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::{CommandRelay, Invoker, ReplyError, ReplySink};

/// Errors that can occur while talking to Discord.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Failed to build Discord client: {0}")]
    Build(#[source] serenity::Error),

    #[error("Discord gateway error: {0}")]
    Gateway(#[source] serenity::Error),
}

/// Gateway intents needed to read and answer command messages.
#[must_use]
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Picks the name shown for a user: guild nickname, then global name, then username.
fn display_name(nick: Option<&str>, global_name: Option<&str>, username: &str) -> String {
    nick.or(global_name).unwrap_or(username).to_owned()
}

/// Sends replies to the channel an invocation came from.
pub struct ChannelReplySink {
    channel_id: ChannelId,
    http: Arc<Http>,
}

impl ChannelReplySink {
    #[must_use]
    pub fn new(channel_id: ChannelId, http: Arc<Http>) -> Self {
        Self { channel_id, http }
    }
}

#[async_trait]
impl ReplySink for ChannelReplySink {
    async fn send(&self, text: &str) -> Result<(), ReplyError> {
        self.channel_id
            .say(&self.http, text)
            .await
            .map(|_| ())
            .map_err(|e| ReplyError::Send(format!("channel {}: {e}", self.channel_id)))
    }
}

/// Routes gateway events to the command relay.
pub struct RelayEventHandler {
    relay: Arc<CommandRelay>,
}

impl RelayEventHandler {
    #[must_use]
    pub fn new(relay: Arc<CommandRelay>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl EventHandler for RelayEventHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "Bot is ready. Logged in as {} (ID: {})",
            ready.user.name, ready.user.id
        );
        ctx.set_activity(Some(ActivityData::playing(self.relay.settings().presence())));
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(command) = self.relay.parse(&msg.content) else {
            return;
        };

        let nick = msg.member.as_ref().and_then(|m| m.nick.as_deref());
        let invoker = Invoker {
            display_name: display_name(nick, msg.author.global_name.as_deref(), &msg.author.name),
            id: msg.author.id.get(),
        };
        debug!("Command from {} in channel {}", invoker.display_name, msg.channel_id);

        let sink = ChannelReplySink::new(msg.channel_id, Arc::clone(&ctx.http));
        self.relay
            .dispatch(command, invoker, msg.channel_id.get(), &sink)
            .await;
    }
}

/// Discord bot client.
pub struct DiscordBot {
    client: Client,
}

impl DiscordBot {
    /// Builds the gateway client with the relay registered as event handler.
    ///
    /// No connection is made until [`DiscordBot::run`].
    pub async fn new(token: &str, relay: Arc<CommandRelay>) -> Result<Self, DiscordError> {
        let client = Client::builder(token, intents())
            .event_handler(RelayEventHandler::new(relay))
            .await
            .map_err(DiscordError::Build)?;

        Ok(Self { client })
    }

    /// Handle used to stop all shards from another task.
    #[must_use]
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        Arc::clone(&self.client.shard_manager)
    }

    /// Connects and processes events until the shards stop.
    pub async fn run(&mut self) -> Result<(), DiscordError> {
        info!("Connecting to Discord gateway...");
        self.client.start().await.map_err(DiscordError::Gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_include_message_content() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::DIRECT_MESSAGES));
    }

    #[test]
    fn test_display_name_prefers_nickname() {
        assert_eq!(display_name(Some("Nick"), Some("Global"), "user"), "Nick");
        assert_eq!(display_name(None, Some("Global"), "user"), "Global");
        assert_eq!(display_name(None, None, "user"), "user");
    }
}
