// src/llm/openai.rs

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// Default chat-completions API base URL.
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request to chat API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("chat API response contained no message content")]
    MissingContent,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Minimal chat-completions client. One request, one text response; both
/// the matcher and the summarizer go through [`generate`](Self::generate).
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_API_BASE_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    /// Overrides the API base URL (compatible proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sends a single-user-message completion request and returns the text
    /// of the first choice.
    pub async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let payload = json!({
            "model": self.model,
            "temperature": temperature,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url.trim_end_matches('/')))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{mock, server_url};

    #[tokio::test]
    async fn generate_returns_first_choice_content() {
        let _m = mock("POST", "/ok/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "hello"}}]}"#,
            )
            .create();

        let client =
            OpenAiClient::new("test-key").with_base_url(format!("{}/ok", server_url()));
        let text = client.generate("say hello", 0.0).await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let _m = mock("POST", "/unauthorized/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": "invalid api key"}"#)
            .create();

        let client =
            OpenAiClient::new("bad-key").with_base_url(format!("{}/unauthorized", server_url()));
        let err = client.generate("hi", 0.0).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn empty_content_is_missing_content() {
        let _m = mock("POST", "/empty/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": ""}}]}"#)
            .create();

        let client =
            OpenAiClient::new("test-key").with_base_url(format!("{}/empty", server_url()));
        let err = client.generate("hi", 0.0).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingContent));
    }
}
