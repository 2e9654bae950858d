//! Bot settings and credential loading.

use serde::{Deserialize, Serialize};

use super::{COMMAND_NAME, COMMAND_PREFIX, DEFAULT_MODEL, SYSTEM_PERSONA};

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Secrets required to run the bot.
#[derive(Clone)]
pub struct Credentials {
    /// OpenAI API key.
    pub openai_api_key: String,

    /// Discord bot token.
    pub discord_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"<redacted>")
            .field("discord_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads credentials from the process environment.
    ///
    /// Expects `OPENAI_API_KEY` and `DISCORD_TOKEN` to be set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar(name))
        };

        let openai_api_key = require(OPENAI_API_KEY_VAR)?;
        let discord_token = require(DISCORD_TOKEN_VAR)?;

        Ok(Self {
            openai_api_key,
            discord_token,
        })
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSettings {
    /// Command prefix (e.g. `!`).
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Name of the relay command.
    #[serde(default = "default_command_name")]
    pub command_name: String,

    /// Chat model identifier sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// System-role persona sent ahead of every prompt.
    #[serde(default = "default_persona")]
    pub persona: String,
}

fn default_command_prefix() -> String {
    COMMAND_PREFIX.to_owned()
}

fn default_command_name() -> String {
    COMMAND_NAME.to_owned()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_persona() -> String {
    SYSTEM_PERSONA.to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            command_name: default_command_name(),
            model: default_model(),
            persona: default_persona(),
        }
    }
}

impl BotSettings {
    /// Full trigger as typed in chat, e.g. `!gpt`.
    #[must_use]
    pub fn trigger(&self) -> String {
        format!("{}{}", self.command_prefix, self.command_name)
    }

    /// Presence text shown once connected.
    #[must_use]
    pub fn presence(&self) -> String {
        format!("Chatting with {}!", self.model)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or .env file")]
    MissingEnvVar(&'static str),
}
