//! Decision types for detector verdicts and hook responses.

use serde::Serialize;

/// The result of analyzing a command.
///
/// Detectors return one of these for a single candidate string; the
/// aggregator returns the first `Block` across all candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command to run.
    Allow,
    /// Block the command with a reason.
    Block(BlockInfo),
}

/// Information about why a command was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    /// The rule that triggered the block (e.g. `git.push.force`).
    pub rule: String,
    /// Human-readable reason for blocking.
    pub reason: String,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, reason))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }

    /// The block reason, if blocked.
    pub fn reason(&self) -> Option<&str> {
        self.block_info().map(|info| info.reason.as_str())
    }
}
