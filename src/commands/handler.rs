//! Command relay implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::sink::ReplySink;
use super::types::{BotCommand, Invocation, Invoker, RelayOutcome};
use crate::completion::{CompletionProvider, CompletionRequest};
use crate::config::{BotSettings, MAX_RESPONSE_CHARS, MESSAGE_CHAR_LIMIT, TRUNCATION_NOTICE};

/// Reply sent when the completion call fails for any reason.
pub const FAILURE_MESSAGE: &str =
    "An error occurred while talking to the OpenAI API. Please try again later.";

/// Relays prompts to the completion provider and answers in the channel.
///
/// Holds no per-invocation state; one instance serves every event.
pub struct CommandRelay {
    settings: BotSettings,
    provider: Arc<dyn CompletionProvider>,
}

impl CommandRelay {
    /// Creates a new relay.
    #[must_use]
    pub fn new(settings: BotSettings, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { settings, provider }
    }

    /// Settings this relay was built with.
    #[must_use]
    pub const fn settings(&self) -> &BotSettings {
        &self.settings
    }

    /// Parses a chat message into a command, if it is one.
    #[must_use]
    pub fn parse(&self, message_text: &str) -> Option<BotCommand> {
        BotCommand::parse(
            message_text,
            &self.settings.command_prefix,
            &self.settings.command_name,
        )
    }

    /// Executes a parsed command on behalf of `invoker`.
    pub async fn dispatch(
        &self,
        command: BotCommand,
        invoker: Invoker,
        channel_id: u64,
        sink: &dyn ReplySink,
    ) -> RelayOutcome {
        debug!("Handling command: {} (from {})", command, invoker.id);

        let outcome = match command {
            BotCommand::Ask(prompt) => {
                let invocation = Invocation {
                    invoker,
                    prompt,
                    channel_id,
                };
                self.handle(&invocation, sink).await
            }
            BotCommand::Help => {
                send(sink, &self.help_message()).await;
                RelayOutcome::Help
            }
        };

        info!("Command outcome: {:?} (channel {})", outcome, channel_id);
        outcome
    }

    /// Runs one invocation through validation, completion and reply.
    ///
    /// Sends either the usage hint alone, or the processing notice followed
    /// by exactly one answer or failure message. Never returns an error.
    pub async fn handle(&self, invocation: &Invocation, sink: &dyn ReplySink) -> RelayOutcome {
        if invocation.prompt.trim().is_empty() {
            send(sink, &self.usage_message()).await;
            return RelayOutcome::Usage;
        }

        let name = &invocation.invoker.display_name;
        send(sink, &self.processing_message(name)).await;

        let request = CompletionRequest::single_turn(
            &self.settings.model,
            &self.settings.persona,
            &invocation.prompt,
        );

        match self.provider.complete(&request).await {
            Ok(text) => {
                let (shaped, truncated) = shape_completion(&text);
                if truncated {
                    debug!(
                        "Truncated completion from {} to {} chars",
                        text.chars().count(),
                        MAX_RESPONSE_CHARS
                    );
                }
                send(sink, &compose_answer(name, &invocation.prompt, &shaped)).await;
                RelayOutcome::Answered { truncated }
            }
            Err(e) => {
                error!("An error occurred during API call: {}", e);
                send(sink, FAILURE_MESSAGE).await;
                RelayOutcome::Failed
            }
        }
    }

    fn usage_message(&self) -> String {
        let trigger = self.settings.trigger();
        format!(
            "Please provide a question after the `{trigger}` command. \
             Example: `{trigger} Write a haiku about computers.`"
        )
    }

    fn processing_message(&self, display_name: &str) -> String {
        format!(
            "🤖 **Processing prompt for {display_name}...** (Model: {})",
            self.settings.model
        )
    }

    fn help_message(&self) -> String {
        let trigger = self.settings.trigger();
        format!(
            "**Commands**\n\
             `{trigger} <question>` Ask {model} a question. Usage: `{trigger} What is the capital of France?`\n\
             `{prefix}help` Show this message",
            model = self.settings.model,
            prefix = self.settings.command_prefix,
        )
    }
}

/// Sends a reply, logging delivery failures instead of propagating them.
async fn send(sink: &dyn ReplySink, text: &str) {
    if let Err(e) = sink.send(text).await {
        warn!("{}", e);
    }
}

/// Cuts completion text to [`MAX_RESPONSE_CHARS`] and appends the notice.
///
/// Returns the shaped text and whether it was truncated.
fn shape_completion(text: &str) -> (String, bool) {
    if text.chars().count() > MAX_RESPONSE_CHARS {
        let kept: String = text.chars().take(MAX_RESPONSE_CHARS).collect();
        (format!("{kept}{TRUNCATION_NOTICE}"), true)
    } else {
        (text.to_owned(), false)
    }
}

/// Builds the final answer, shortening the echoed prompt if needed so the
/// message stays within [`MESSAGE_CHAR_LIMIT`].
fn compose_answer(display_name: &str, prompt: &str, text: &str) -> String {
    let header = format!("**{display_name} asked:** ");
    let body = format!("```markdown\n{text}\n```");

    let fixed = header.chars().count() + 2 + body.chars().count();
    let room = MESSAGE_CHAR_LIMIT.saturating_sub(fixed);

    format!("{header}{}\n\n{body}", truncate(prompt, room))
}

/// Truncates a string to at most `max_len` chars, ending in "..." if cut.
fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_owned()
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    }
}
