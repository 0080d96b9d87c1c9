//! Prompt assembly for simulation rounds.
//!
//! Pure string building: persona descriptors, feature input channels, the
//! fixed response template, and optional prior conversation. No I/O happens
//! here, and personas with missing optional fields render with empty strings
//! rather than failing the round.

use vox_core::feature::FeatureInput;
use vox_core::persona::Persona;

/// System message for simulation rounds.
pub const FACILITATOR_SYSTEM_PROMPT: &str = "You are an AI facilitator for a virtual focus group.";

/// System message for feedback report generation.
pub const ANALYST_SYSTEM_PROMPT: &str = "You are an AI product analyst.";

/// Fixed instruction block; the literal markers are what the transcript
/// parser expects back from the model.
const RESPONSE_TEMPLATE: &str = "\
Simulate a realistic conversation between these personas about this feature.
- Each persona should speak in turn, responding exactly once.
- Use the following template for each persona's response:

[Persona Name]:
- Response: <what they say>
- Reasoning: <why they think that>
- Confidence: <High / Medium / Low>
- Suggested follow-up: <next question they might ask>";

/// Builds the user prompt for one simulation round.
///
/// Renders one descriptor line per persona, each feature channel as
/// `"<channel>:\n<value>\n\n"` (empty values become `None`), the fixed
/// response template, and, when non-empty, the prior conversation verbatim
/// with a continue-naturally instruction.
pub fn build_prompt(
    personas: &[Persona],
    feature_inputs: &[FeatureInput],
    conversation_history: &str,
) -> String {
    let persona_block = personas
        .iter()
        .map(describe_persona)
        .collect::<Vec<_>>()
        .join("\n");

    let mut feature_block = String::new();
    for input in feature_inputs {
        feature_block.push_str(&format!("{}:\n{}\n\n", input.channel, input.value_label()));
    }

    let mut prompt = format!(
        "Personas:\n{persona_block}\n\nFeature Inputs:\n{feature_block}{RESPONSE_TEMPLATE}"
    );

    if !conversation_history.is_empty() {
        prompt.push_str("\n\nPrevious conversation:\n");
        prompt.push_str(conversation_history);
        prompt.push_str("\nContinue the conversation naturally.");
    }

    prompt
}

/// One descriptor line: `- Name (Occupation, Location, Tech: X, Traits: a, b)`.
fn describe_persona(persona: &Persona) -> String {
    format!(
        "- {} ({}, {}, Tech: {}, Traits: {})",
        persona.name,
        persona.occupation,
        persona.location_label(),
        persona.tech_proficiency,
        persona.traits_label(),
    )
}
