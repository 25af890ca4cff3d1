//! Detection of compound commands (&&, ||, ;, |, newline).

/// Operators that chain or sequence commands.
///
/// Matched as plain substrings, quoted or not.
pub const SHELL_OPERATORS: &[&str] = &["&&", "||", ";", "|", "\n"];

/// Whether the raw command contains any chaining operator.
///
/// Compound commands are never decomposed; detectors fall back to coarse
/// whole-string checks for them.
pub fn has_shell_operators(command: &str) -> bool {
    SHELL_OPERATORS.iter().any(|op| command.contains(op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        assert!(!has_shell_operators("ls -la"));
    }

    #[test]
    fn test_and_or() {
        assert!(has_shell_operators("cd /tmp && ls"));
        assert!(has_shell_operators("test -f file || touch file"));
    }

    #[test]
    fn test_pipe_and_semicolon() {
        assert!(has_shell_operators("cat file | grep pattern"));
        assert!(has_shell_operators("echo a; echo b"));
    }

    #[test]
    fn test_newline() {
        assert!(has_shell_operators("echo a\necho b"));
    }

    #[test]
    fn test_quoted_operators_still_count() {
        assert!(has_shell_operators("echo 'a && b'"));
    }

    #[test]
    fn test_background_is_not_an_operator() {
        assert!(!has_shell_operators("sleep 1 &"));
    }
}
