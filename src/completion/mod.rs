//! Completion provider module.
//!
//! Defines the provider seam used by the relay and the OpenAI
//! chat-completions client that implements it.

mod client;
mod provider;

pub use client::{OPENAI_CHAT_URL, OpenAiClient};
pub use provider::{ChatMessage, CompletionError, CompletionProvider, CompletionRequest, Role};
