//! Completion request types and the provider seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single-turn completion request: persona followed by the user prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Builds the two-message exchange sent for every prompt.
    #[must_use]
    pub fn single_turn(model: &str, persona: &str, prompt: &str) -> Self {
        Self {
            model: model.to_owned(),
            messages: vec![ChatMessage::system(persona), ChatMessage::user(prompt)],
        }
    }
}

/// Errors returned by a completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned no choices")]
    EmptyChoices,

    #[error("provider returned a choice without content")]
    MissingContent,
}

/// A remote service that turns a persona and prompt into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submits one request and waits for the completion text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
