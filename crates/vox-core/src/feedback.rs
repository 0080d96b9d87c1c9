//! Per-persona sentiment aggregation over a conversation log.
//!
//! The summary is recomputed from the full transcript on every call; nothing
//! is cached or persisted, so the result always reflects the current log.

use crate::persona::Persona;
use crate::sentiment;
use crate::transcript::extract_response;
use serde::{Deserialize, Serialize};

/// Average sentiment for one persona across a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSentiment {
    /// Persona display name.
    pub persona: String,
    /// Mean score over matching lines: insight +1, concern -1, neutral 0.
    pub average: f64,
    /// Number of transcript lines attributed to this persona.
    pub samples: usize,
}

/// Summarizes sentiment per persona over raw transcript lines.
///
/// A line counts toward a persona when it starts with the persona's name
/// (exact, case-sensitive match). Every persona in `personas` appears in the
/// output, in the given order; personas with no matching lines get an average
/// of 0 so downstream visualizations always see the complete panel.
pub fn summarize_sentiment(lines: &[String], personas: &[Persona]) -> Vec<PersonaSentiment> {
    let mut sums = vec![(0i64, 0usize); personas.len()];

    for line in lines {
        for (idx, persona) in personas.iter().enumerate() {
            if line.starts_with(persona.name.as_str()) {
                let body = extract_response(line, &persona.name);
                let (sum, count) = &mut sums[idx];
                *sum += i64::from(sentiment::score(body));
                *count += 1;
            }
        }
    }

    personas
        .iter()
        .zip(sums)
        .map(|(persona, (sum, count))| PersonaSentiment {
            persona: persona.name.clone(),
            average: if count == 0 { 0.0 } else { sum as f64 / count as f64 },
            samples: count,
        })
        .collect()
}
