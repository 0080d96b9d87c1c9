//! OpenAiBackend - Direct REST implementation of [`CompletionBackend`].
//!
//! Calls the OpenAI Chat Completions API over HTTP.
//! Configuration priority: ~/.config/vox/secret.json > environment variables

use crate::completion::{CompletionBackend, CompletionRequest, ProviderError};
use crate::shape::ResponseShape;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::warn;
use vox_core::config::{DEFAULT_MODEL, MODEL_CHOICES};
use vox_infrastructure::storage::SecretStorage;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Backend that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
}

impl OpenAiBackend {
    /// Creates a new backend with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Loads configuration from ~/.config/vox/secret.json or environment
    /// variables.
    ///
    /// Priority:
    /// 1. ~/.config/vox/secret.json
    /// 2. Environment variable (OPENAI_API_KEY)
    ///
    /// Returns the backend together with the configured default model name,
    /// falling back to [`DEFAULT_MODEL`].
    pub fn try_from_env() -> Result<(Self, String), ProviderError> {
        // Try loading from SecretStorage first
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(openai) = secret_config.openai {
                    let model = openai.model_name.unwrap_or_else(|| DEFAULT_MODEL.into());
                    warn_unknown_model(&model);
                    return Ok((Self::new(openai.api_key), model));
                }
            }
        }

        // Fallback to environment variables
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| ProviderError::Transport {
            message: "OPENAI_API_KEY not found in ~/.config/vox/secret.json or environment"
                .to_string(),
            retryable: false,
        })?;

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        warn_unknown_model(&model);
        Ok((Self::new(api_key), model))
    }
}

/// Unknown models are logged, not rejected: the API accepts models the
/// choice list has not caught up with yet.
fn warn_unknown_model(model: &str) {
    if !MODEL_CHOICES.contains(&model) {
        warn!(model, "configured model is not one of the offered chat models");
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| ProviderError::Transport {
                message: format!("OpenAI API request failed: {err}"),
                retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let shape: ResponseShape = response.json().await.map_err(|err| {
            ProviderError::MalformedResponse(format!("Failed to parse OpenAI response: {err}"))
        })?;

        Ok(shape.normalize())
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> ProviderError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    ProviderError::Http {
        status: status.as_u16(),
        message,
        retryable: is_retryable_status(status),
        retry_after,
    }
}

/// Rate limiting, timeouts, server-side failures, and auth hiccups are all
/// treated as transient; everything else fails the attempt outright.
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // HTTP-date form is not handled
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_server_errors_are_retryable() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(StatusCode::UNAUTHORIZED));
        assert!(is_retryable_status(StatusCode::FORBIDDEN));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn error_body_message_is_extracted() {
        let body = r#"{"error": {"message": "quota exceeded", "type": "rate_limit", "code": null}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string(), None);
        match err {
            ProviderError::Http { status, message, retryable, .. } => {
                assert_eq!(status, 429);
                assert_eq!(message, "quota exceeded");
                assert!(retryable);
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_is_passed_through() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "not json".to_string(), None);
        match err {
            ProviderError::Http { message, retryable, .. } => {
                assert_eq!(message, "not json");
                assert!(!retryable);
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn retry_after_header_parses_whole_seconds() {
        let header = HeaderValue::from_static("7");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(7))
        );
        let bad = HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&bad)), None);
    }
}
