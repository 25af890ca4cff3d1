//! Configured deny rules.

use crate::config::CompiledDenyRule;
use crate::decision::Decision;

/// Check configured deny rules against a command.
pub fn check_deny_rules(command: &str, rules: &[CompiledDenyRule]) -> Decision {
    for rule in rules {
        if rule.regex.is_match(command) {
            let name = rule.rule.name.as_deref().unwrap_or("custom.deny");
            return Decision::block(name, &rule.rule.reason);
        }
    }

    Decision::allow()
}
