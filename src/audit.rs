//! Audit logging of evaluated commands, one JSON object per line.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::decision::Decision;
use crate::input::HookInput;

/// Longest command summary kept in the log, in characters.
const MAX_SUMMARY_CHARS: usize = 200;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Tool that was invoked.
    pub tool: String,
    /// Whether the command was blocked.
    pub blocked: bool,
    /// Rule that triggered the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Reason for blocking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The command, truncated.
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from hook input and decision.
    pub fn new(input: &HookInput, decision: &Decision) -> Self {
        let (rule, reason) = match decision.block_info() {
            Some(info) => (Some(info.rule.clone()), Some(info.reason.clone())),
            None => (None, None),
        };

        let summary = input
            .command()
            .map(|c| truncate_chars(c, MAX_SUMMARY_CHARS))
            .unwrap_or_else(|| "<unknown>".to_string());

        Self {
            timestamp: Utc::now(),
            session_id: input.session_id.clone(),
            tool: input.tool_name.clone(),
            blocked: decision.is_blocked(),
            rule,
            reason,
            summary,
        }
    }
}

/// Truncate on a char boundary, marking the cut with "...".
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a decision for an input.
    pub fn log_decision(&mut self, input: &HookInput, decision: &Decision) -> std::io::Result<()> {
        let entry = AuditEntry::new(input, decision);
        self.log(&entry)
    }
}
