//! Language-model completion collaborator
//!
//! A thin client for an OpenAI-compatible chat-completions API behind the
//! [`CompletionProvider`] trait. Requests carry a single user message; there
//! is no retry or backoff here. Callers that want one wrap the provider.

use crate::config::LlmConfig;
use crate::LlmError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the completion API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Text-completion service keyed by a prompt string
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `prompt` and returns the completion text
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Completion provider backed by an OpenAI-compatible HTTP API
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    /// Creates a client with an explicit API key
    pub fn new(api_key: impl Into<String>, config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Creates a client reading the API key from the environment
    pub fn from_env(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| LlmError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(api_key, config))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.api_base);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        tracing::debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("no choices in response".to_string()))?
            .message
            .content;

        Ok(content.trim().to_string())
    }
}
