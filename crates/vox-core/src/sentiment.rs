//! Keyword-based sentiment tagging for persona responses.
//!
//! Classification is a coarse whole-word match against two keyword lists.
//! When a fragment matches both lists, insight wins because it is checked
//! first; that tie-break is inherited product behavior, not an accident, so
//! do not reorder the checks without a product decision.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Positive-affect words that mark a fragment as an insight.
const INSIGHT_KEYWORDS: &[&str] = &[
    "think",
    "like",
    "improve",
    "great",
    "benefit",
    "love",
    "helpful",
    "excellent",
    "wonderful",
    "suggest",
    "prefer",
    "interested",
];

/// Negative-affect words that mark a fragment as a concern.
const CONCERN_KEYWORDS: &[&str] = &[
    "worry",
    "worried",
    "concern",
    "concerned",
    "unsure",
    "problem",
    "issue",
    "hard",
    "difficult",
    "frustrated",
    "frustrating",
    "confused",
    "avoid",
];

static INSIGHT_RE: Lazy<Regex> = Lazy::new(|| keyword_regex(INSIGHT_KEYWORDS));
static CONCERN_RE: Lazy<Regex> = Lazy::new(|| keyword_regex(CONCERN_KEYWORDS));

fn keyword_regex(keywords: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", keywords.join("|"));
    Regex::new(&pattern).expect("keyword pattern is a valid regex")
}

/// Coarse sentiment label derived from a text fragment.
///
/// Labels are always recomputed from the current text and never stored
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive signal worth surfacing.
    Insight,
    /// Negative signal worth surfacing.
    Concern,
    /// Neither keyword list matched.
    Neutral,
}

impl Sentiment {
    /// Numeric score used by the aggregator: insight +1, concern -1, else 0.
    pub fn score(&self) -> i32 {
        match self {
            Sentiment::Insight => 1,
            Sentiment::Concern => -1,
            Sentiment::Neutral => 0,
        }
    }
}

/// Classifies a text fragment.
///
/// Pure and deterministic for a fixed keyword list. Empty input is `Neutral`.
/// Insight is checked before concern; a fragment matching both lists is
/// reported as an insight.
pub fn classify(text: &str) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }
    if INSIGHT_RE.is_match(text) {
        return Sentiment::Insight;
    }
    if CONCERN_RE.is_match(text) {
        return Sentiment::Concern;
    }
    Sentiment::Neutral
}

/// Convenience wrapper returning the numeric score directly.
pub fn score(text: &str) -> i32 {
    classify(text).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_neutral() {
        assert_eq!(classify(""), Sentiment::Neutral);
    }

    #[test]
    fn positive_keywords_classify_as_insight() {
        assert_eq!(classify("I love this"), Sentiment::Insight);
        assert_eq!(classify("That would IMPROVE things"), Sentiment::Insight);
    }

    #[test]
    fn negative_keywords_classify_as_concern() {
        assert_eq!(classify("I'm worried"), Sentiment::Concern);
        assert_eq!(classify("this is a real problem"), Sentiment::Concern);
    }

    #[test]
    fn insight_wins_when_both_match() {
        // Documented tie-break: insight is checked first.
        assert_eq!(classify("I love this but I'm worried"), Sentiment::Insight);
    }

    #[test]
    fn matching_is_whole_word() {
        // "likely" must not match "like", "hardware" must not match "hard".
        assert_eq!(classify("it will likely ship"), Sentiment::Neutral);
        assert_eq!(classify("new hardware"), Sentiment::Neutral);
    }

    #[test]
    fn scores_map_to_plus_minus_zero() {
        assert_eq!(score("I love this"), 1);
        assert_eq!(score("I'm worried"), -1);
        assert_eq!(score("the sky is blue"), 0);
    }
}
