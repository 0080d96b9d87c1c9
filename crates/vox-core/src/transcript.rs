//! Persona transcript line parsing.
//!
//! Model output for a round is expected to follow the template
//! `[Name]: - Response: <text>`, but personas drift: brackets disappear, the
//! `Response:` label changes case, or the line is plain prose. Extraction is
//! therefore a total function that degrades to returning the input unchanged.

/// Extracts the spoken body of a persona's transcript line.
///
/// Stripping happens in three steps, each optional:
/// 1. a leading `[Name]:` or `Name:` prefix for the given persona,
/// 2. a `- Response:` or `Response:` label (ASCII case-insensitive),
/// 3. a bare leading `-`.
///
/// Steps 2 and 3 only apply behind a matched name prefix, and stripping
/// repeats until the name prefix no longer matches, so re-applying the
/// function to its own output is a no-op even when the body itself opens
/// with the persona tag. A line without a recognizable prefix is returned
/// unchanged, never an error.
pub fn extract_response<'a>(line: &'a str, persona_name: &str) -> &'a str {
    let mut current = line;
    // Each pass consumes at least the name and colon, so this terminates.
    while let Some(rest) = strip_name_prefix(current.trim_start(), persona_name) {
        let rest = strip_response_label(rest);
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        current = rest.trim();
    }
    current
}

/// Strips `[Name]:` or `Name:` and returns the remainder, or `None` when the
/// line does not open with this persona's tag.
fn strip_name_prefix<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let after_name = if let Some(bracketed) = line.strip_prefix('[') {
        bracketed.strip_prefix(name)?.trim_start().strip_prefix(']')?
    } else {
        line.strip_prefix(name)?
    };
    let rest = after_name.trim_start().strip_prefix(':')?;
    Some(rest.trim_start())
}

/// Strips a leading `- Response:` or `Response:` label, case-insensitively.
fn strip_response_label(line: &str) -> &str {
    const LABEL: &str = "response:";

    let candidate = match line.strip_prefix('-') {
        Some(after_dash) => after_dash.trim_start(),
        None => line,
    };
    match candidate.get(..LABEL.len()) {
        Some(head) if head.eq_ignore_ascii_case(LABEL) => candidate[LABEL.len()..].trim_start(),
        _ => line,
    }
}
