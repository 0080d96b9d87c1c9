//! Default persona presets.
//!
//! Provides a small system-defined panel so a fresh installation can run a
//! simulation round before the user has created any personas of their own.

use super::model::{Persona, PersonaSource, TechProficiency};

/// UUID for Sophia persona (deterministic UUID v5 from "Sophia Martinez")
const SOPHIA_UUID: &str = "4f8a2c1d-6b3e-5a9f-8c2d-1e7b4a6f3c9d";

/// UUID for Jamal persona (deterministic UUID v5 from "Jamal Robinson")
const JAMAL_UUID: &str = "9d3b7e2f-4a1c-5e8d-b6f3-2c9a7d4e1b8f";

/// UUID for Eleanor persona (deterministic UUID v5 from "Eleanor Chen")
const ELEANOR_UUID: &str = "1c6e9a4b-8d2f-5c3a-9e7b-4f1d8c6a2e5b";

/// Returns the default persona panel shipped with the application.
///
/// These personas are system-defined and cover a spread of tech proficiency
/// so early feedback rounds surface both enthusiasm and friction.
pub fn default_panel() -> Vec<Persona> {
    vec![
        Persona {
            id: SOPHIA_UUID.to_string(),
            name: "Sophia Martinez".to_string(),
            occupation: "Marketing Manager".to_string(),
            location: Some("Austin, TX".to_string()),
            tech_proficiency: TechProficiency::High,
            behavioral_traits: vec![
                "early adopter".to_string(),
                "detail-oriented".to_string(),
                "vocal about friction".to_string(),
            ],
            source: PersonaSource::System,
        },
        Persona {
            id: JAMAL_UUID.to_string(),
            name: "Jamal Robinson".to_string(),
            occupation: "High School Teacher".to_string(),
            location: Some("Chicago, IL".to_string()),
            tech_proficiency: TechProficiency::Medium,
            behavioral_traits: vec![
                "pragmatic".to_string(),
                "budget-conscious".to_string(),
            ],
            source: PersonaSource::System,
        },
        Persona {
            id: ELEANOR_UUID.to_string(),
            name: "Eleanor Chen".to_string(),
            occupation: "Retired Librarian".to_string(),
            location: Some("Portland, OR".to_string()),
            tech_proficiency: TechProficiency::Low,
            behavioral_traits: vec![
                "cautious".to_string(),
                "values clear instructions".to_string(),
            ],
            source: PersonaSource::System,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_has_unique_ids_and_system_source() {
        let panel = default_panel();
        assert_eq!(panel.len(), 3);

        let mut ids: Vec<&str> = panel.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        assert!(panel.iter().all(|p| p.source == PersonaSource::System));
    }
}
