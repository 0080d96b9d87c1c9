//! Focus group session model.
//!
//! This module contains the session entity that owns the selected persona
//! panel and the conversation log for one simulation. The orchestrating layer
//! (UI or API handler) creates the session, passes it by reference into each
//! round, and drops it when the interaction ends; nothing here is global.

use super::turn::{ConversationTurn, Speaker};
use crate::persona::Persona;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One focus group session: a persona panel plus an append-only transcript.
///
/// The transcript can only grow or be fully cleared; there is no soft delete.
/// Concurrent sessions must each own their own instance, since no locking is
/// provided at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Personas selected for this session, in presentation order
    pub personas: Vec<Persona>,
    /// Append-only conversation log
    pub transcript: Vec<ConversationTurn>,
}

impl FocusSession {
    /// Creates a new session around the given persona panel.
    pub fn new(personas: Vec<Persona>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            personas,
            transcript: Vec::new(),
        }
    }

    /// Appends a user turn to the transcript.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push_turn(Speaker::User, text.into());
    }

    /// Appends a persona turn to the transcript.
    pub fn push_persona(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.push_turn(Speaker::Persona(name.into()), text.into());
    }

    /// Clears the transcript entirely. The persona panel is kept.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Renders the transcript as one `"Name: text"` line per turn.
    pub fn lines(&self) -> Vec<String> {
        self.transcript.iter().map(ConversationTurn::render).collect()
    }

    /// Renders the transcript as a single block for prompt continuation.
    pub fn history_text(&self) -> String {
        self.lines().join("\n")
    }

    fn push_turn(&mut self, speaker: Speaker, text: String) {
        self.transcript.push(ConversationTurn {
            speaker,
            text,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::default_panel;

    #[test]
    fn new_session_starts_empty() {
        let session = FocusSession::new(default_panel());
        assert!(!session.id.is_empty());
        assert!(session.transcript.is_empty());
        assert_eq!(session.history_text(), "");
    }

    #[test]
    fn turns_append_in_order_and_render_with_speaker() {
        let mut session = FocusSession::new(vec![]);
        session.push_user("What do you think of dark mode?");
        session.push_persona("Ava", "I like it");

        let lines = session.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "User: What do you think of dark mode?");
        assert_eq!(lines[1], "Ava: I like it");
    }

    #[test]
    fn clear_resets_transcript_but_keeps_panel() {
        let mut session = FocusSession::new(default_panel());
        session.push_user("hello");
        session.clear();

        assert!(session.transcript.is_empty());
        assert_eq!(session.personas.len(), 3);
    }
}
