//! Feature input channels.
//!
//! A simulation round is driven by one or more named input channels: free
//! text describing the feature, or a list of uploaded artifact names. Inputs
//! are constructed fresh per request and never persisted.

use serde::{Deserialize, Serialize};

/// The value carried by a single input channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Free-form text.
    Text(String),
    /// Names of uploaded files (mockups, specs).
    Files(Vec<String>),
}

/// One named input channel for a round, e.g. `"Feature description"`.
///
/// Channels keep their construction order; prompts render them in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInput {
    pub channel: String,
    pub value: FeatureValue,
}

impl FeatureInput {
    /// Creates a free-text channel.
    pub fn text(channel: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            value: FeatureValue::Text(value.into()),
        }
    }

    /// Creates a file-list channel.
    pub fn files(channel: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            channel: channel.into(),
            value: FeatureValue::Files(names),
        }
    }

    /// Renders the channel value for prompting; empty values become `"None"`.
    pub fn value_label(&self) -> String {
        match &self.value {
            FeatureValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    "None".to_string()
                } else {
                    trimmed.to_string()
                }
            }
            FeatureValue::Files(names) => {
                if names.is_empty() {
                    "None".to_string()
                } else {
                    names.join(", ")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_render_as_none() {
        assert_eq!(FeatureInput::text("Text", "  ").value_label(), "None");
        assert_eq!(FeatureInput::files("Files", vec![]).value_label(), "None");
    }

    #[test]
    fn file_lists_are_comma_joined() {
        let input = FeatureInput::files("Files", vec!["a.png".into(), "b.png".into()]);
        assert_eq!(input.value_label(), "a.png, b.png");
    }
}
