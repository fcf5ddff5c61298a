//! Prompt templates for the command orchestrator.
//!
//! Two prompts per invocation at most: the command prompt describing the
//! tool set and reply grammar, and the follow-up prompt feeding a tool
//! result back for the final user-facing answer.

use crate::tools::FileTool;

/// Build the command prompt: role, tool enumeration, reply grammar
/// exemplars, and the user's request.
pub fn build_command_prompt(command: &str) -> String {
    let tool_descriptions = FileTool::ALL
        .iter()
        .map(|t| format!("- {}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful AI assistant that can perform file operations in a secure sandboxed environment.

Available tools:
{tool_descriptions}

When you need to use a tool, respond with exactly this format:
TOOL_CALL: tool_name
INPUT: {{json input if required}}

For example:
TOOL_CALL: list_files
INPUT:

Or:
TOOL_CALL: create_file
INPUT: {{\"filename\": \"test.txt\", \"content\": \"Hello World\"}}

If you don't need to use any tools, just respond normally.

User request: {command}"
    )
}

/// Build the follow-up prompt after a tool ran: the original prompt, the
/// model's first reply, and the tool's result string.
pub fn build_followup_prompt(prompt: &str, response: &str, tool_result: &str) -> String {
    format!(
        "{prompt}

Previous response: {response}

Tool result: {tool_result}

Please provide a helpful response to the user based on the tool result."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_prompt_lists_every_tool() {
        let prompt = build_command_prompt("show me my files");
        for tool in FileTool::ALL {
            assert!(prompt.contains(tool.name()));
            assert!(prompt.contains(tool.description()));
        }
    }

    #[test]
    fn command_prompt_shows_grammar_exemplars() {
        let prompt = build_command_prompt("anything");
        assert!(prompt.contains("TOOL_CALL: tool_name"));
        assert!(prompt.contains("TOOL_CALL: list_files"));
        assert!(prompt.contains(r#"{"filename": "test.txt", "content": "Hello World"}"#));
    }

    #[test]
    fn command_prompt_ends_with_user_request() {
        let prompt = build_command_prompt("delete everything");
        assert!(prompt.ends_with("User request: delete everything"));
    }

    #[test]
    fn followup_prompt_concatenates_all_three_parts() {
        let prompt = build_followup_prompt("PROMPT", "FIRST REPLY", "TOOL OUT");
        assert!(prompt.starts_with("PROMPT"));
        assert!(prompt.contains("Previous response: FIRST REPLY"));
        assert!(prompt.contains("Tool result: TOOL OUT"));
        assert!(prompt.ends_with("Please provide a helpful response to the user based on the tool result."));
    }
}
