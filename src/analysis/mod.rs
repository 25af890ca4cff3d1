//! Decision aggregation over the original command and its nested shells.

mod bash;

pub use bash::analyze_bash;

use crate::config::CompiledDenyRule;
use crate::decision::Decision;
use crate::rules::{analyze_command, check_deny_rules};
use crate::shell::unwrap_shell_dash_c;

/// Maximum number of nested `sh -c` levels unwrapped.
pub const MAX_NESTED_SHELLS: usize = 3;

/// The original command followed by each inner command recovered from
/// nested shell invocations, outermost first.
///
/// Stops at the first level that yields nothing, an empty string, or a
/// command already seen.
pub fn candidates(command: &str) -> Vec<String> {
    let mut found = vec![command.to_string()];
    for _ in 0..MAX_NESTED_SHELLS {
        let Some(current) = found.last() else {
            break;
        };
        match unwrap_shell_dash_c(current) {
            Some(inner) if !inner.is_empty() && !found.contains(&inner) => found.push(inner),
            _ => break,
        }
    }
    found
}

/// Decide whether a shell command may run, using the built-in detectors.
///
/// Pure and stateless: the same command always yields the same decision.
pub fn evaluate(command: &str) -> Decision {
    evaluate_with_rules(command, &[])
}

/// Like [`evaluate`], with configured deny rules checked after the built-in
/// detectors for each candidate.
pub fn evaluate_with_rules(command: &str, deny_rules: &[CompiledDenyRule]) -> Decision {
    for candidate in candidates(command) {
        let decision = analyze_command(&candidate);
        if decision.is_blocked() {
            return decision;
        }

        let decision = check_deny_rules(&candidate, deny_rules);
        if decision.is_blocked() {
            return decision;
        }
    }

    Decision::allow()
}
