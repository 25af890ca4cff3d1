//! Recover the inner command of `bash -c '...'` style invocations.

use super::tokenizer::{basename, tokenize};
use super::wrappers::strip_wrappers;

/// Shell interpreters whose `-c` argument is analyzed as a command.
pub const SHELL_INTERPRETERS: &[&str] = &["bash", "sh", "zsh", "dash"];

/// Return the inner command string of a shell `-c` invocation.
///
/// Handles wrapped and combined forms such as `sudo bash -lc "..."` and
/// `sh -xec '...'`. Returns `None` when the command does not tokenize, is not
/// a shell invocation, or has no `-c` option with a following argument.
pub fn unwrap_shell_dash_c(command: &str) -> Option<String> {
    let tokens = tokenize(command).ok()?;
    let core = strip_wrappers(&tokens);

    let shell = core.first()?;
    if !SHELL_INTERPRETERS.contains(&basename(shell)) {
        return None;
    }

    for (idx, t) in core.iter().enumerate().skip(1) {
        if t == "--" || !t.starts_with('-') || t == "-" {
            break;
        }
        if t.starts_with("--") {
            continue;
        }
        if t[1..].contains('c') {
            return core.get(idx + 1).cloned();
        }
    }

    None
}
