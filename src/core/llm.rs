//! Chat-completion client
//!
//! Information Hiding:
//! - OpenAI wire format (request/response bodies) private to this module
//! - HTTP status codes folded into `LlmError` kinds
//! - Callers depend on the `ChatCompletion` trait, never on `reqwest`

use crate::config::{ApiKey, LLMConfig};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One completion call: model parameters plus the ordered messages.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("rate limited or out of quota: {body}")]
    RateLimited { body: String },

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),
}

impl LlmError {
    fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Auth {
                status: status.as_u16(),
                body,
            },
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited { body },
            _ => LlmError::Api {
                status: status.as_u16(),
                body,
            },
        }
    }
}

/// Given a system prompt and a message, return completion text or fail.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
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
    content: Option<String>,
}

pub struct LLMClient {
    client: Client,
    api_key: ApiKey,
    endpoint: String,
    max_tokens: Option<u32>,
}

impl LLMClient {
    pub fn new(api_key: ApiKey, config: &LLMConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(LlmError::Setup)?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ChatCompletion for LLMClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("[LLMClient] API returned error status {}: {}", status, error_text);
            return Err(LlmError::from_status(status, error_text.trim().to_string()));
        }

        let text = response.text().await.map_err(LlmError::Network)?;
        let chat_response: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response contained no completion text".to_string()))?;

        tracing::debug!(
            model = %request.model,
            duration_ms = %started.elapsed().as_millis(),
            "[LLMClient] Chat completion finished"
        );
        Ok(content)
    }
}
