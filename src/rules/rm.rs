//! rm command analysis.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::decision::Decision;
use crate::shell::{basename, has_shell_operators, strip_wrappers, tokenize};

const RULE: &str = "rm.recursive_force";

/// Prefixes under which a forced recursive delete is permitted.
///
/// `$TMPDIR` and friends are never safe: their value is unknown before the
/// shell expands them and may be empty.
pub const SAFE_TEMP_PREFIXES: &[&str] = &["/tmp/", "/var/tmp/"];

/// `rm` and the rest of its line.
static RM_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brm\b[^\n]*").expect("rm pattern is valid"));

static RECURSIVE_FLAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s--recursive\b|\s-[^\s-]*r").expect("recursive pattern is valid")
});

static FORCE_FLAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s--force\b|\s-[^\s-]*f").expect("force pattern is valid")
});

/// Block `rm` with recursive and force flags unless every target is in a
/// temporary directory.
pub fn analyze_rm(command: &str) -> Decision {
    if has_shell_operators(command) {
        return fallback_rm(
            command,
            "Recursive forced deletion (rm -rf) in a compound command is blocked",
        );
    }

    let tokens = match tokenize(command) {
        Ok(tokens) if !tokens.is_empty() => tokens,
        _ => {
            return fallback_rm(
                command,
                "Recursive forced deletion (rm -rf) could not be parsed safely",
            );
        }
    };

    let core = strip_wrappers(&tokens);
    let Some((cmd, args)) = core.split_first() else {
        return Decision::allow();
    };
    if basename(cmd) != "rm" {
        return Decision::allow();
    }

    let parsed = parse_rm_args(args);
    if !(parsed.recursive && parsed.force) {
        return Decision::allow();
    }

    if parsed.targets.is_empty() {
        return Decision::block(
            RULE,
            "Recursive forced deletion (rm with -r/-f) without any target path",
        );
    }

    for path in &parsed.targets {
        if !SAFE_TEMP_PREFIXES.iter().any(|p| path.starts_with(p)) {
            return Decision::block(
                RULE,
                "Recursive forced deletion (rm -rf) outside temporary directories",
            );
        }
        if path.split('/').any(|seg| seg == "..") {
            return Decision::block(
                RULE,
                "Recursive forced deletion (rm -rf) with path traversal ('..') is not allowed",
            );
        }
    }

    Decision::allow()
}

/// Whole-string check used when the command cannot be parsed structurally.
///
/// Blocks when some line has `rm` followed by both a recursive and a force
/// flag. A single cluster such as `-rf` supplies both. The two flags may come
/// in either order (`rm -f -r`), which only widens what gets blocked.
fn fallback_rm(command: &str, reason: &str) -> Decision {
    let hit = RM_LINE.find_iter(command).any(|m| {
        let rest = &m.as_str()[2..];
        RECURSIVE_FLAG.is_match(rest) && FORCE_FLAG.is_match(rest)
    });
    if hit {
        Decision::block(RULE, reason)
    } else {
        Decision::allow()
    }
}

#[derive(Debug, Default)]
struct RmArgs<'a> {
    recursive: bool,
    force: bool,
    targets: Vec<&'a str>,
}

/// Parse rm arguments the way rm does: options may be interspersed with
/// operands until an explicit `--`.
fn parse_rm_args(args: &[String]) -> RmArgs<'_> {
    let mut parsed = RmArgs::default();
    let mut end_of_options = false;

    for t in args {
        if end_of_options {
            parsed.targets.push(t);
            continue;
        }
        if t == "--" {
            end_of_options = true;
            continue;
        }
        if t.starts_with("--") {
            match t.as_str() {
                "--recursive" => parsed.recursive = true,
                "--force" => parsed.force = true,
                _ => {}
            }
            continue;
        }
        if t.starts_with('-') && t != "-" {
            let flags = t[1..].to_lowercase();
            parsed.recursive |= flags.contains('r');
            parsed.force |= flags.contains('f');
            continue;
        }
        parsed.targets.push(t);
    }

    parsed
}
