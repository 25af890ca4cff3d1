//! Destructive-operation detectors.

mod custom;
mod git;
mod patterns;
mod rm;

pub use custom::check_deny_rules;
pub use git::{analyze_git_clean, analyze_git_push};
pub use patterns::{DESTRUCTIVE_PATTERNS, DestructivePattern, check_destructive_patterns};
pub use rm::{SAFE_TEMP_PREFIXES, analyze_rm};

use crate::decision::Decision;

/// A detector inspects one candidate command string.
pub type Detector = fn(&str) -> Decision;

/// Built-in detectors in evaluation order: structural checks first, then the
/// whole-string pattern table.
pub const DETECTORS: &[Detector] = &[
    analyze_rm,
    analyze_git_push,
    analyze_git_clean,
    check_destructive_patterns,
];

/// Run the built-in detectors over a single candidate, first block wins.
pub fn analyze_command(command: &str) -> Decision {
    DETECTORS
        .iter()
        .map(|detector| detector(command))
        .find(Decision::is_blocked)
        .unwrap_or(Decision::Allow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rm_checked_before_patterns() {
        let decision = analyze_command("rm -rf / ; git stash clear");
        assert_eq!(decision.block_info().unwrap().rule, "rm.recursive_force");
    }

    #[test]
    fn test_push_checked_before_clean() {
        let decision = analyze_command("git push -f; git clean -f");
        assert_eq!(decision.block_info().unwrap().rule, "git.push.force");
    }

    #[test]
    fn test_safe_command() {
        assert_eq!(analyze_command("cargo test"), Decision::Allow);
    }
}
