//! Response formatting for hook output.

use crate::decision::{BlockInfo, Decision};
use serde::Serialize;

/// JSON response for denied commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenyResponse {
    pub hook_specific_output: HookSpecificOutput,
}

/// The hook-specific output for PreToolUse hooks.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Must be "PreToolUse" for this hook type.
    pub hook_event_name: &'static str,
    /// "deny" stops the tool call.
    pub permission_decision: &'static str,
    /// Message shown to the agent.
    pub permission_decision_reason: String,
}

/// Format a decision as hook output for stdout. Allow produces nothing.
pub fn format_response(decision: &Decision, command: &str) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => format_deny_json(info, command),
    }
}

/// The deny message: reason, offending command, and what to do next.
pub fn deny_message(info: &BlockInfo, command: &str) -> String {
    format!(
        "BLOCKED by {}\n\nReason: {}\n\nCommand: {}\n\n\
         If you really need to run this command, ask the user for explicit permission.",
        env!("CARGO_PKG_NAME"),
        info.reason,
        command
    )
}

fn format_deny_json(info: &BlockInfo, command: &str) -> Option<String> {
    let response = DenyResponse {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: "PreToolUse",
            permission_decision: "deny",
            permission_decision_reason: deny_message(info, command),
        },
    };
    serde_json::to_string(&response).ok()
}
