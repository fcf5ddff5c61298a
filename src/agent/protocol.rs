//! The `TOOL_CALL:` / `INPUT:` line grammar.
//!
//! The only wire format between the model and the orchestrator. Not JSON,
//! not schema-validated — a forward pass over lines where the latest
//! prefixed line wins for each field.

/// Line prefix requesting a tool invocation.
pub const TOOL_CALL_PREFIX: &str = "TOOL_CALL:";

/// Line prefix carrying the tool's raw input text.
pub const INPUT_PREFIX: &str = "INPUT:";

/// A tool invocation extracted from a model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    pub name: String,
    pub input: String,
}

/// Scan a model reply for a tool request.
///
/// Returns `None` unless the `TOOL_CALL:` substring appears anywhere in the
/// text. A substring match without a prefixed line (e.g. the marker quoted
/// mid-sentence) yields an empty name, which fails lookup downstream and
/// falls back to returning the reply verbatim.
pub fn parse_tool_request(text: &str) -> Option<ToolRequest> {
    if !text.contains(TOOL_CALL_PREFIX) {
        return None;
    }

    let mut name = String::new();
    let mut input = String::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(TOOL_CALL_PREFIX) {
            name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(INPUT_PREFIX) {
            input = rest.trim().to_string();
        }
    }

    Some(ToolRequest { name, input })
}
