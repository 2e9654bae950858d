//! Command handling module.
//!
//! Parses `!gpt` messages, relays the prompt to the completion provider
//! and answers in the originating channel.

mod handler;
mod sink;
mod types;

pub use handler::{CommandRelay, FAILURE_MESSAGE};
pub use sink::{ReplyError, ReplySink};
pub use types::{BotCommand, Invocation, Invoker, RelayOutcome};
