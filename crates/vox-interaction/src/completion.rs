//! Chat-completion provider boundary.
//!
//! The rest of the workspace talks to a language model exclusively through
//! [`CompletionBackend`]: a model identifier, an ordered list of role-tagged
//! messages, a temperature, and a token budget in; generated text out. Any
//! compatible provider can be substituted behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One role-tagged message in a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// A single completion request against an opaque provider.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates an empty request for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Appends a system message.
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(content));
        self
    }

    /// Appends a user message.
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Failure of a single completion attempt.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("transport error: {message}")]
    Transport { message: String, retryable: bool },

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        retryable: bool,
        /// Provider-suggested delay, from the `retry-after` header.
        retry_after: Option<Duration>,
    },

    /// The response body could not be read as JSON at all.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Whether the retry loop may attempt this request again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport { retryable, .. } => *retryable,
            ProviderError::Http { retryable, .. } => *retryable,
            ProviderError::MalformedResponse(_) => false,
        }
    }

    /// Provider-suggested retry delay, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ProviderError::Http { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Terminal completion failure, produced after the retry budget is spent.
///
/// Distinct from a successful empty string: callers can always tell "the
/// model said nothing" apart from "every attempt failed".
#[derive(Debug, Clone, Error)]
#[error("completion failed after {attempts} attempt(s): {last}")]
pub struct CompletionError {
    /// Total attempts made, including the first.
    pub attempts: u32,
    /// The error from the final attempt.
    pub last: ProviderError,
}

/// An opaque chat-completion provider.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issues a single completion attempt. No retries at this layer.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}
