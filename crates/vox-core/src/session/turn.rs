//! Conversation turn types.
//!
//! This module contains types for representing turns in a focus group
//! conversation, including the speaker attribution.

use serde::{Deserialize, Serialize};

/// Who produced a turn in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum Speaker {
    /// The human driving the session.
    User,
    /// A simulated persona, identified by display name.
    Persona(String),
}

/// A single turn in the append-only conversation log.
///
/// Turns attributed to a persona are expected to reference a persona that was
/// selected at generation time; stale attributions are tolerated for display
/// (best-effort name match) but never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who spoke.
    pub speaker: Speaker,
    /// The spoken text, already stripped of any structural prefix.
    pub text: String,
    /// Timestamp when the turn was recorded (ISO 8601 format).
    pub timestamp: String,
}

impl ConversationTurn {
    /// Renders the turn as a single transcript line, `"Name: text"`.
    pub fn render(&self) -> String {
        match &self.speaker {
            Speaker::User => format!("User: {}", self.text),
            Speaker::Persona(name) => format!("{}: {}", name, self.text),
        }
    }
}
