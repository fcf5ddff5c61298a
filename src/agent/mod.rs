//! Command Orchestrator — one natural-language command in, one answer out.
//!
//! Per invocation: model call, at most one tool dispatch, optional follow-up
//! model call. Nothing persists across invocations; the only failure channel
//! is the `Error executing command:` string.

pub mod prompts;
pub mod protocol;

use std::sync::Arc;

use crate::llm::{LlmError, ModelClient};
use crate::tools::FileTool;
use crate::workspace::Workspace;

/// Turns one command into one answer, optionally via a single tool call.
pub struct Agent {
    model: Arc<dyn ModelClient>,
    workspace: Workspace,
}

impl Agent {
    pub fn new(model: Arc<dyn ModelClient>, workspace: Workspace) -> Self {
        Self { model, workspace }
    }

    /// Run one command to completion. Never fails — any error anywhere in
    /// the sequence is rendered as a single string.
    pub async fn run(&self, command: &str) -> String {
        match self.try_run(command).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                format!("Error executing command: {e}")
            }
        }
    }

    async fn try_run(&self, command: &str) -> Result<String, LlmError> {
        let prompt = prompts::build_command_prompt(command);
        let response = self.model.generate(&prompt).await?;

        if let Some(request) = protocol::parse_tool_request(&response) {
            // Unknown tool name: no dispatch, return the reply verbatim.
            if let Some(tool) = FileTool::by_name(&request.name) {
                tracing::debug!(tool = tool.name(), "dispatching tool call");
                let tool_result = tool.invoke(&self.workspace, &request.input).await;

                let followup = prompts::build_followup_prompt(&prompt, &response, &tool_result);
                return self.model.generate(&followup).await;
            }
            tracing::debug!(name = %request.name, "unknown tool requested, returning raw reply");
        }

        Ok(response)
    }
}
