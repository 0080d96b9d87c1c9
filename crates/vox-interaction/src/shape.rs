//! Normalization of heterogeneous provider response bodies.
//!
//! Provider SDK migrations have shipped at least three body layouts for the
//! same logical reply: the classic `choices[].message.content` chat shape, a
//! flat `output_text` field, and a bare `output` string. Parsing goes through
//! one untagged union so every known layout lands in a plain string; anything
//! unrecognized falls back to its JSON string representation instead of
//! erroring.

use serde::Deserialize;
use serde_json::Value;

/// Known response body layouts, tried in declaration order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseShape {
    /// Chat-completions layout: `{"choices": [{"message": {"content": ...}}]}`
    Chat { choices: Vec<ChatChoice> },
    /// Responses-API layout: `{"output_text": "..."}`
    OutputText { output_text: String },
    /// Minimal layout: `{"output": "..."}`
    Output { output: String },
    /// A bare JSON string.
    Plain(String),
    /// Anything else; preserved for the string-representation fallback.
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ResponseShape {
    /// Flattens the shape into the generated text.
    ///
    /// A chat shape with no choices or null content normalizes to the empty
    /// string: that is a successful "model said nothing", not an error.
    pub fn normalize(self) -> String {
        match self {
            ResponseShape::Chat { choices } => choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .unwrap_or_default(),
            ResponseShape::OutputText { output_text } => output_text,
            ResponseShape::Output { output } => output,
            ResponseShape::Plain(text) => text,
            ResponseShape::Other(value) => value.to_string(),
        }
    }
}
