//! Configuration module for the relay bot.
//!
//! Holds the fixed command, model and message-size constants, and loads
//! the Discord and OpenAI credentials from the environment.

mod settings;

pub use settings::{BotSettings, ConfigError, Credentials, DISCORD_TOKEN_VAR, OPENAI_API_KEY_VAR};

/// Prefix that marks a chat message as a command.
pub const COMMAND_PREFIX: &str = "!";

/// Name of the relay command (`!gpt`).
pub const COMMAND_NAME: &str = "gpt";

/// Chat model used for every completion.
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// System-role instruction sent ahead of every prompt.
pub const SYSTEM_PERSONA: &str =
    "You are a helpful, concise, and friendly Discord bot. Keep your answers brief and relevant.";

/// Maximum number of completion characters relayed before truncating.
pub const MAX_RESPONSE_CHARS: usize = 1900;

/// Discord's per-message character ceiling.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// Appended to completion text cut at [`MAX_RESPONSE_CHARS`].
pub const TRUNCATION_NOTICE: &str = "...\n[Response too long, truncated.]";
