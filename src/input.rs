//! Input parsing for PreToolUse hook invocations.

use serde::Deserialize;
use thiserror::Error;

/// Name of the shell-execution tool; every other tool passes through.
pub const BASH_TOOL: &str = "Bash";

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The raw input from the PreToolUse hook.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// The tool being invoked (e.g., "Bash", "Read").
    #[serde(default)]
    pub tool_name: String,

    /// The tool's input parameters as raw JSON.
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Current working directory (optional).
    #[serde(default)]
    pub cwd: Option<String>,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Parsed input for the Bash tool.
#[derive(Debug, Clone)]
pub struct BashInput {
    /// The command to execute.
    pub command: String,
}

impl HookInput {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extract Bash input. `None` for other tools and for a missing or
    /// empty command.
    pub fn as_bash(&self) -> Option<BashInput> {
        if self.tool_name != BASH_TOOL {
            return None;
        }
        let command = self.command()?;
        if command.is_empty() {
            return None;
        }
        Some(BashInput {
            command: command.to_string(),
        })
    }

    /// Get the command (for Bash tool).
    pub fn command(&self) -> Option<&str> {
        self.tool_input.get("command").and_then(|v| v.as_str())
    }
}
