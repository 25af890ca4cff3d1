//! Git command analysis: force pushes and forced cleans.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::decision::Decision;
use crate::shell::{basename, has_shell_operators, strip_wrappers, tokenize};

/// Global git options that consume the following word.
const GLOBAL_OPTIONS_WITH_ARG: &[&str] = &[
    "-C",
    "-c",
    "--git-dir",
    "--work-tree",
    "--namespace",
    "--exec-path",
];

const PUSH_RULE: &str = "git.push.force";
const CLEAN_RULE: &str = "git.clean.force";
const CLEAN_REASON: &str = "Permanently removes untracked files";

static GIT_PUSH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgit\b[^\n]*\bpush\b").expect("push pattern is valid"));

/// Force markers in a compound command; `--force-with-lease` counts too.
static COMPOUND_FORCE_MARKER: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(
        r"(?i)(?:--force(?!-with-lease)\b|(?<!\S)-f\b|\+\w+|--force-with-lease\b)",
    )
    .expect("force marker pattern is valid")
});

static FORCE_MARKER: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(r"(?i)(?:--force(?!-with-lease)\b|(?<!\S)-f\b|\+\w+)")
        .expect("force marker pattern is valid")
});

static GIT_CLEAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgit\b[^\n]*\bclean\b").expect("clean pattern is valid"));

static CLEAN_FORCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s--force\b|\s-[^\s-]*f").expect("clean force pattern is valid")
});

static CLEAN_DRY_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s--dry-run\b|\s-[^\s-]*n").expect("dry-run pattern is valid")
});

/// Backtracking errors count as a match.
fn fancy_match(re: &fancy_regex::Regex, text: &str) -> bool {
    re.is_match(text).unwrap_or(true)
}

/// Split `git [global options] <subcommand> args...` into subcommand and args.
///
/// Accepts explicit paths like `/usr/bin/git`.
fn git_subcommand(core: &[String]) -> Option<(&str, &[String])> {
    let (cmd, rest) = core.split_first()?;
    if basename(cmd) != "git" {
        return None;
    }

    let mut idx = 0;
    while let Some(t) = rest.get(idx) {
        if t == "--" {
            idx += 1;
            break;
        }
        if !t.starts_with('-') {
            break;
        }
        idx += 1;
        if GLOBAL_OPTIONS_WITH_ARG.contains(&t.as_str()) && idx < rest.len() {
            idx += 1;
        }
    }

    let subcommand = rest.get(idx)?;
    Some((subcommand.as_str(), &rest[idx + 1..]))
}

/// Block force pushes unless `--force-with-lease` is used on its own.
pub fn analyze_git_push(command: &str) -> Decision {
    if has_shell_operators(command) {
        if GIT_PUSH.is_match(command) && fancy_match(&COMPOUND_FORCE_MARKER, command) {
            return Decision::block(PUSH_RULE, "Force push flags in a compound command are blocked");
        }
        return Decision::allow();
    }

    let tokens = match tokenize(command) {
        Ok(tokens) if !tokens.is_empty() => tokens,
        _ => {
            if GIT_PUSH.is_match(command) && fancy_match(&FORCE_MARKER, command) {
                return Decision::block(PUSH_RULE, "Force push could not be parsed safely");
            }
            return Decision::allow();
        }
    };

    let core = strip_wrappers(&tokens);
    let Some(("push", args)) = git_subcommand(core) else {
        return Decision::allow();
    };

    let force_with_lease = args
        .iter()
        .any(|t| t == "--force-with-lease" || t.starts_with("--force-with-lease="));
    let explicit_force = args.iter().any(|t| t == "--force" || t == "-f");
    let plus_refspec = args.iter().any(|t| t.starts_with('+') && t.len() > 1);

    if explicit_force || plus_refspec {
        if force_with_lease {
            return Decision::block(
                PUSH_RULE,
                "Refusing ambiguous force push flags; use only --force-with-lease",
            );
        }
        return Decision::block(
            PUSH_RULE,
            "Force push rewrites remote history (use --force-with-lease if you must)",
        );
    }

    Decision::allow()
}

/// Block `git clean` that deletes files: force without dry-run.
pub fn analyze_git_clean(command: &str) -> Decision {
    if has_shell_operators(command) {
        if !GIT_CLEAN.is_match(command) || CLEAN_DRY_RUN.is_match(command) {
            return Decision::allow();
        }
        if CLEAN_FORCE.is_match(command) {
            return Decision::block(CLEAN_RULE, CLEAN_REASON);
        }
        return Decision::allow();
    }

    let tokens = match tokenize(command) {
        Ok(tokens) if !tokens.is_empty() => tokens,
        _ => {
            if GIT_CLEAN.is_match(command)
                && CLEAN_FORCE.is_match(command)
                && !CLEAN_DRY_RUN.is_match(command)
            {
                return Decision::block(CLEAN_RULE, CLEAN_REASON);
            }
            return Decision::allow();
        }
    };

    let core = strip_wrappers(&tokens);
    let Some(("clean", args)) = git_subcommand(core) else {
        return Decision::allow();
    };

    let mut force = false;
    let mut dry_run = false;
    for t in args {
        if t == "--" {
            break;
        }
        match t.as_str() {
            "--dry-run" => dry_run = true,
            "--force" => force = true,
            "-" => {}
            t if t.starts_with("--") => {}
            t if t.starts_with('-') => {
                force |= t.contains('f');
                dry_run |= t.contains('n');
            }
            _ => {}
        }
    }

    if force && !dry_run {
        return Decision::block(CLEAN_RULE, CLEAN_REASON);
    }

    Decision::allow()
}
