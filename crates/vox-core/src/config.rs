//! Model and retry defaults plus secret configuration types.
//!
//! The defaults here are the knobs an orchestrating caller (UI or API handler)
//! is expected to expose; everything below them takes explicit values.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chat models the application offers to the user.
pub const MODEL_CHOICES: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo"];

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for simulation rounds.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Token budget for a single simulation round.
pub const DEFAULT_MAX_TOKENS: u32 = 1200;

/// Token budget for feedback report generation.
pub const REPORT_MAX_TOKENS: u32 = 1500;

/// Sampling temperature for feedback report generation; lower than rounds to
/// keep the analysis consistent.
pub const REPORT_TEMPERATURE: f32 = 0.6;

/// Number of retries after the first failed completion attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Base delay between retry attempts; the n-th wait is `n * DEFAULT_BACKOFF`.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Secret configuration loaded from `~/.config/vox/secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    /// OpenAI credentials, if configured.
    #[serde(default)]
    pub openai: Option<OpenAiSecret>,
}

/// OpenAI API credentials and optional model override.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OpenAiSecret {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_an_offered_choice() {
        assert!(MODEL_CHOICES.contains(&DEFAULT_MODEL));
    }
}
