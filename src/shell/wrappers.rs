//! Strip wrapper commands (VAR=value, env, sudo, command, builtin).

use super::tokenizer::basename;

/// Maximum number of strip passes.
const MAX_STRIP_PASSES: usize = 10;

/// sudo options that consume the following word.
const SUDO_OPTIONS_WITH_ARG: &[&str] = &["-u", "-g", "-h", "-p", "-r", "-t", "-C"];

/// Strip wrapper commands to get the tokens of the command that actually runs.
///
/// Passes repeat until nothing changes, so stacked wrappers collapse:
/// - `sudo -u root rm -rf x` -> `rm -rf x`
/// - `FOO=1 env BAR=2 command git push` -> `git push`
/// - `sudo env FOO=1 command sudo ls` -> `ls`
pub fn strip_wrappers(tokens: &[String]) -> &[String] {
    let mut core = tokens;
    for _ in 0..MAX_STRIP_PASSES {
        let skip = strip_once(core);
        if skip == 0 {
            break;
        }
        core = &core[skip..];
    }
    core
}

/// One pass over the wrapper kinds, in order. Returns how many tokens to drop.
fn strip_once(tokens: &[String]) -> usize {
    let mut idx = skip_assignments(tokens, 0);
    idx = skip_env(tokens, idx);
    idx = skip_sudo(tokens, idx);
    skip_command_builtin(tokens, idx)
}

/// Whether a word starts with `NAME=`, NAME being a shell identifier.
pub fn is_assignment(word: &str) -> bool {
    let Some((name, _)) = word.split_once('=') else {
        return false;
    };
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn skip_assignments(tokens: &[String], mut idx: usize) -> usize {
    while idx < tokens.len() && is_assignment(&tokens[idx]) {
        idx += 1;
    }
    idx
}

fn is_wrapper(tokens: &[String], idx: usize, names: &[&str]) -> bool {
    tokens
        .get(idx)
        .is_some_and(|t| names.contains(&basename(t)))
}

fn skip_env(tokens: &[String], mut idx: usize) -> usize {
    if !is_wrapper(tokens, idx, &["env"]) {
        return idx;
    }
    idx += 1;
    while let Some(t) = tokens.get(idx) {
        if t == "--" {
            return idx + 1;
        }
        if t.starts_with('-') || (t.contains('=') && !t.starts_with('=')) {
            idx += 1;
            continue;
        }
        break;
    }
    idx
}

fn skip_sudo(tokens: &[String], mut idx: usize) -> usize {
    if !is_wrapper(tokens, idx, &["sudo"]) {
        return idx;
    }
    idx += 1;
    while let Some(t) = tokens.get(idx) {
        if t == "--" {
            return idx + 1;
        }
        if !t.starts_with('-') {
            break;
        }
        idx += 1;
        if SUDO_OPTIONS_WITH_ARG.contains(&t.as_str()) && idx < tokens.len() {
            idx += 1;
        }
    }
    idx
}

fn skip_command_builtin(tokens: &[String], mut idx: usize) -> usize {
    if !is_wrapper(tokens, idx, &["command", "builtin"]) {
        return idx;
    }
    idx += 1;
    while let Some(t) = tokens.get(idx) {
        if t == "--" {
            return idx + 1;
        }
        if !t.starts_with('-') {
            break;
        }
        idx += 1;
    }
    idx
}
