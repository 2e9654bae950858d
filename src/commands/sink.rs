//! Outbound reply seam.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while delivering a reply.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("failed to send reply: {0}")]
    Send(String),
}

/// Destination for replies to one invocation (the originating channel).
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends a plain text message.
    async fn send(&self, text: &str) -> Result<(), ReplyError>;
}
