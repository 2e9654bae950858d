//! OpenAI chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{CompletionError, CompletionProvider, CompletionRequest};

/// Chat-completions endpoint.
pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Request timeout, matching the official SDK default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Thin OpenAI client. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl OpenAiClient {
    /// Creates a client for the public OpenAI endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        Self::with_endpoint(api_key, OPENAI_CHAT_URL)
    }

    /// Creates a client for a compatible endpoint.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!("Requesting completion from {} (model: {})", self.endpoint, request.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }
}

/// Pulls the first choice's text out of a raw response body.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyChoices)?
        .message
        .content
        .ok_or(CompletionError::MissingContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = OpenAiClient::new("sk-test").unwrap();
        assert_eq!(client.endpoint(), OPENAI_CHAT_URL);
        assert!(!format!("{client:?}").contains("sk-test"));
    }

    #[test]
    fn test_extract_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Paris."}, "finish_reason": "stop"}
            ]
        }"#;
        assert_eq!(extract_content(body).unwrap(), "Paris.");
    }

    #[test]
    fn test_extract_takes_first_choice() {
        let body = r#"{"choices": [
            {"message": {"content": "first"}},
            {"message": {"content": "second"}}
        ]}"#;
        assert_eq!(extract_content(body).unwrap(), "first");
    }

    #[test]
    fn test_extract_empty_choices() {
        let err = extract_content(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, CompletionError::EmptyChoices));

        let err = extract_content("{}").unwrap_err();
        assert!(matches!(err, CompletionError::EmptyChoices));
    }

    #[test]
    fn test_extract_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let err = extract_content(body).unwrap_err();
        assert!(matches!(err, CompletionError::MissingContent));
    }

    #[test]
    fn test_extract_malformed() {
        let err = extract_content("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }
}
