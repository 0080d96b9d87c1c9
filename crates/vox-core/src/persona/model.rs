//! Persona domain model.
//!
//! Represents synthetic user profiles that role-play feedback during a focus
//! group simulation. Each persona has a fixed identity and a set of
//! behavioral traits that steer how the language model voices it.

use serde::{Deserialize, Serialize};

/// Self-reported comfort level with technology.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechProficiency {
    Low,
    Medium,
    High,
}

impl Default for TechProficiency {
    fn default() -> Self {
        TechProficiency::Medium
    }
}

impl std::fmt::Display for TechProficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TechProficiency::Low => "Low",
            TechProficiency::Medium => "Medium",
            TechProficiency::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// Represents the source of a persona (system-provided or user-created).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum PersonaSource {
    /// System-provided default personas
    System,
    /// User-created custom personas
    User,
}

impl Default for PersonaSource {
    fn default() -> Self {
        PersonaSource::User
    }
}

/// A synthetic user profile participating in focus group rounds.
///
/// Only `id`, `name`, and `occupation` are required in the persona store;
/// everything else falls back to a sensible default so that hand-edited or
/// uploaded documents with partial entries still load.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Persona {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Display name of the persona
    pub name: String,
    /// Occupation used to ground the persona's perspective
    pub occupation: String,
    /// Where the persona lives; optional in the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Comfort level with technology
    #[serde(default)]
    pub tech_proficiency: TechProficiency,
    /// Ordered list of behavioral traits (appended to, never reordered)
    #[serde(default)]
    pub behavioral_traits: Vec<String>,
    /// Source of the persona (System or User)
    #[serde(default)]
    pub source: PersonaSource,
}

impl Persona {
    /// Location rendered for prompts; missing locations become an empty string
    /// rather than an error.
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Traits joined for prompt rendering.
    pub fn traits_label(&self) -> String {
        self.behavioral_traits.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_tolerates_missing_optional_fields() {
        let json = r#"{"id": "p-1", "name": "Ava", "occupation": "Nurse"}"#;
        let persona: Persona = serde_json::from_str(json).unwrap();

        assert_eq!(persona.name, "Ava");
        assert_eq!(persona.location, None);
        assert_eq!(persona.tech_proficiency, TechProficiency::Medium);
        assert!(persona.behavioral_traits.is_empty());
        assert_eq!(persona.source, PersonaSource::User);
    }

    #[test]
    fn tech_proficiency_uses_store_spelling() {
        let persona: Persona = serde_json::from_str(
            r#"{"id": "p-2", "name": "Rin", "occupation": "Teacher", "tech_proficiency": "Low"}"#,
        )
        .unwrap();
        assert_eq!(persona.tech_proficiency, TechProficiency::Low);
        assert_eq!(persona.tech_proficiency.to_string(), "Low");
    }

    #[test]
    fn labels_substitute_empty_strings() {
        let persona = Persona {
            id: "p-3".to_string(),
            name: "Noah".to_string(),
            occupation: "Farmer".to_string(),
            location: None,
            tech_proficiency: TechProficiency::Low,
            behavioral_traits: vec![],
            source: PersonaSource::User,
        };
        assert_eq!(persona.location_label(), "");
        assert_eq!(persona.traits_label(), "");
    }
}
