//! Bash tool analysis.

use super::evaluate_with_rules;
use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::BashInput;

/// Analyze a Bash tool invocation: built-in detectors, then configured deny
/// rules.
pub fn analyze_bash(input: &BashInput, config: &CompiledConfig) -> Decision {
    if input.command.is_empty() {
        return Decision::allow();
    }
    evaluate_with_rules(&input.command, &config.deny_rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DenyRule};

    fn bash(command: &str) -> BashInput {
        BashInput {
            command: command.to_string(),
        }
    }

    fn test_config() -> CompiledConfig {
        Config {
            deny: vec![DenyRule {
                name: Some("git.filter_branch".to_string()),
                pattern: r"git\s+filter-branch".to_string(),
                reason: "Rewrites history".to_string(),
            }],
            ..Default::default()
        }
        .compile()
        .unwrap()
    }

    #[test]
    fn test_builtin_rule() {
        let decision = analyze_bash(&bash("git reset --hard"), &test_config());
        assert_eq!(decision.block_info().unwrap().rule, "git.reset.hard");
    }

    #[test]
    fn test_deny_rule() {
        let decision = analyze_bash(&bash("git filter-branch --all"), &test_config());
        assert_eq!(decision.block_info().unwrap().rule, "git.filter_branch");
    }

    #[test]
    fn test_deny_rule_inside_nested_shell() {
        let decision = analyze_bash(&bash("sh -c 'git filter-branch'"), &test_config());
        assert!(decision.is_blocked());
    }

    #[test]
    fn test_builtin_before_deny_rule() {
        let decision = analyze_bash(&bash("git filter-branch; git stash clear"), &test_config());
        assert_eq!(decision.block_info().unwrap().rule, "git.stash.clear");
    }

    #[test]
    fn test_safe_command() {
        let decision = analyze_bash(&bash("ls -la"), &test_config());
        assert!(!decision.is_blocked());
    }

    #[test]
    fn test_empty_command() {
        let decision = analyze_bash(&bash(""), &CompiledConfig::default());
        assert!(!decision.is_blocked());
    }
}
