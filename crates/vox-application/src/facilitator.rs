//! Facilitator Service
//!
//! Drives one focus group round end to end: builds the prompt from the
//! session's panel and inputs, issues a single resilient completion, splits
//! the reply into per-persona records, tags each record with a sentiment
//! label, and appends the persona turns to the session transcript.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vox_core::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use vox_core::feature::FeatureInput;
use vox_core::feedback::{PersonaSentiment, summarize_sentiment};
use vox_core::sentiment::{self, Sentiment};
use vox_core::session::FocusSession;
use vox_core::transcript::extract_response;
use vox_interaction::{
    CompletionBackend, CompletionError, CompletionRequest, FACILITATOR_SYSTEM_PROMPT,
    ResilientClient, build_prompt,
};

/// One persona's contribution to a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaReply {
    /// Persona display name.
    pub persona: String,
    /// Extracted response body; empty when the model skipped the persona.
    pub response: String,
    /// Sentiment label recomputed from the response body.
    pub sentiment: Sentiment,
}

/// Orchestrates simulation rounds over an explicit session object.
///
/// The service owns no session state of its own; the orchestrating layer
/// passes the session in by reference, so concurrent sessions stay isolated
/// without any locking here.
pub struct FacilitatorService<B: CompletionBackend> {
    client: ResilientClient<B>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl<B: CompletionBackend> FacilitatorService<B> {
    /// Creates a service around an already-configured resilient client.
    pub fn new(client: ResilientClient<B>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the per-round token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Runs one simulation round.
    ///
    /// The optional question is recorded as a user turn before the prompt is
    /// built, so it reaches the model through the conversation history. Every
    /// persona in the session panel gets a reply record, in panel order;
    /// personas the model skipped get an empty response with a neutral label.
    ///
    /// The only error this returns is the completion client's terminal
    /// failure; parsing never fails a round.
    pub async fn run_round(
        &self,
        session: &mut FocusSession,
        feature_inputs: &[FeatureInput],
        question: Option<&str>,
    ) -> Result<Vec<PersonaReply>, CompletionError> {
        if let Some(question) = question {
            session.push_user(question);
        }

        let prompt = build_prompt(&session.personas, feature_inputs, &session.history_text());
        let request = CompletionRequest::new(self.model.as_str())
            .system(FACILITATOR_SYSTEM_PROMPT)
            .user(prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let text = self.client.complete(&request).await?;
        debug!(chars = text.len(), "round completed");

        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

        let replies: Vec<PersonaReply> = session
            .personas
            .iter()
            .map(|persona| {
                let body = lines
                    .iter()
                    .find(|line| line.starts_with(persona.name.as_str()))
                    .map(|line| extract_response(line, &persona.name).to_string())
                    .unwrap_or_default();
                PersonaReply {
                    persona: persona.name.clone(),
                    sentiment: sentiment::classify(&body),
                    response: body,
                }
            })
            .collect();

        for reply in &replies {
            if !reply.response.is_empty() {
                session.push_persona(reply.persona.as_str(), reply.response.as_str());
            }
        }

        Ok(replies)
    }

    /// Per-persona average sentiment over the session transcript so far.
    ///
    /// Recomputed from the full log on every call; every panel persona
    /// appears in the result, in panel order.
    pub fn sentiment_summary(&self, session: &FocusSession) -> Vec<PersonaSentiment> {
        summarize_sentiment(&session.lines(), &session.personas)
    }
}
