//! Command types and definitions.

use std::fmt;

/// Available bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Relay a prompt to the completion provider. The prompt may be empty.
    Ask(String),

    /// Show help information.
    Help,
}

impl BotCommand {
    /// Parses a command from a message text.
    ///
    /// `name` is the relay command (e.g. `gpt`). Arguments are split on
    /// whitespace and rejoined with single spaces.
    ///
    /// Returns `None` if the message is not a recognized command.
    #[must_use]
    pub fn parse(text: &str, prefix: &str, name: &str) -> Option<Self> {
        let after_prefix = text.trim().strip_prefix(prefix)?;

        // The command token must follow the prefix directly ("! gpt" is not a command)
        if after_prefix.starts_with(char::is_whitespace) {
            return None;
        }

        let mut tokens = after_prefix.split_whitespace();
        let cmd = tokens.next()?;

        if cmd == name {
            Some(Self::Ask(tokens.collect::<Vec<_>>().join(" ")))
        } else if cmd == "help" {
            Some(Self::Help)
        } else {
            None
        }
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ask(_) => "ask",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ask(prompt) => write!(f, "ask {prompt}"),
            Self::Help => write!(f, "{}", self.name()),
        }
    }
}

/// The user who triggered a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    /// Name shown in the channel (nickname, global name or username).
    pub display_name: String,

    /// Stable platform user ID.
    pub id: u64,
}

/// One occurrence of the relay command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub invoker: Invoker,

    /// Argument text, already collapsed to single spaces.
    pub prompt: String,

    /// Channel the command came from and where replies go.
    pub channel_id: u64,
}

/// What the relay did with an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Prompt was empty; only the usage hint was sent.
    Usage,

    /// Help listing was sent.
    Help,

    /// Completion was relayed to the channel.
    Answered {
        /// Whether the completion text was cut to fit.
        truncated: bool,
    },

    /// Completion call failed; the generic failure notice was sent.
    Failed,
}

impl RelayOutcome {
    /// Whether the invocation ended in a relayed answer.
    #[must_use]
    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}
