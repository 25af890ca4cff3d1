//! Fixed table of destructive git patterns, matched against the whole string.

use once_cell::sync::Lazy;

use crate::decision::Decision;

/// A destructive operation recognized by text alone.
#[derive(Debug, Clone, Copy)]
pub struct DestructivePattern {
    pub rule: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// Checked in order; the first match wins. Matching is case-insensitive.
pub const DESTRUCTIVE_PATTERNS: &[DestructivePattern] = &[
    DestructivePattern {
        rule: "git.checkout.discard",
        pattern: r"git checkout --\s",
        reason: "Permanently discards uncommitted changes to tracked files",
    },
    DestructivePattern {
        rule: "git.checkout.dot",
        pattern: r"git checkout\s+\.(?:\s*$|\s*[;&|])",
        reason: "Discards all uncommitted changes in current directory",
    },
    DestructivePattern {
        rule: "git.restore",
        pattern: r"git restore\s+(?!--staged)",
        reason: "Discards uncommitted changes (use --staged to only unstage)",
    },
    DestructivePattern {
        rule: "git.reset.hard",
        pattern: r"git reset --hard",
        reason: "Destroys all uncommitted modifications and staging",
    },
    DestructivePattern {
        rule: "git.reset.merge",
        pattern: r"git reset --merge",
        reason: "Can destroy uncommitted changes during merge",
    },
    DestructivePattern {
        rule: "git.branch.force_delete",
        pattern: r"git branch -D",
        reason: "Force-deletes branch bypassing merge safety checks",
    },
    DestructivePattern {
        rule: "git.stash.drop",
        pattern: r"git stash drop",
        reason: "Permanently loses stashed changes",
    },
    DestructivePattern {
        rule: "git.stash.clear",
        pattern: r"git stash clear",
        reason: "Permanently loses ALL stashed changes",
    },
];

static COMPILED: Lazy<Vec<(fancy_regex::Regex, &'static DestructivePattern)>> = Lazy::new(|| {
    DESTRUCTIVE_PATTERNS
        .iter()
        .map(|p| {
            let re = fancy_regex::Regex::new(&format!("(?i){}", p.pattern))
                .expect("destructive patterns are valid");
            (re, p)
        })
        .collect()
});

/// Match the command against the destructive pattern table.
pub fn check_destructive_patterns(command: &str) -> Decision {
    for (re, p) in COMPILED.iter() {
        // Backtracking errors count as a match
        if re.is_match(command).unwrap_or(true) {
            return Decision::block(p.rule, p.reason);
        }
    }
    Decision::allow()
}
