//! Feedback report generation.
//!
//! Turns a finished conversation into a structured analyst report via a
//! single completion. Report generation reuses the same resilient client as
//! simulation rounds, so provider hiccups get the same retry treatment.

use vox_core::config::{REPORT_MAX_TOKENS, REPORT_TEMPERATURE};
use vox_core::session::FocusSession;
use vox_interaction::{
    ANALYST_SYSTEM_PROMPT, CompletionBackend, CompletionError, CompletionRequest, ResilientClient,
};

/// Generates a structured feedback report over the session transcript.
///
/// Returns the report text, or the completion client's terminal failure.
pub async fn generate_feedback_report<B: CompletionBackend>(
    client: &ResilientClient<B>,
    model: &str,
    session: &FocusSession,
) -> Result<String, CompletionError> {
    let prompt = report_prompt(&session.history_text());
    let request = CompletionRequest::new(model)
        .system(ANALYST_SYSTEM_PROMPT)
        .user(prompt)
        .with_temperature(REPORT_TEMPERATURE)
        .with_max_tokens(REPORT_MAX_TOKENS);

    client.complete(&request).await
}

fn report_prompt(conversation: &str) -> String {
    format!(
        "Analyze the following conversation and create a structured feedback report:

Conversation:
{conversation}

Report should include:
- Patterns and themes
- Consensus and disagreements between personas
- Actionable recommendations for feature improvements
- Quantitative metrics (e.g., acceptance, usage likelihood)
- Qualitative insights (specific concerns, suggested improvements)"
    )
}
