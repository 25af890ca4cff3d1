//! Shell-style tokenization (POSIX shlex rules).

use thiserror::Error;

/// Reasons a command cannot be split into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("no closing quotation for {0}")]
    UnterminatedQuote(char),

    #[error("no escaped character after trailing backslash")]
    TrailingEscape,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split a shell command into words, resolving quotes and escapes.
///
/// Either the whole input splits cleanly or an error is returned; there is
/// no partial result.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // A quoted empty string ('') still produces a word.
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    // Only the quote and the backslash itself are escapable here
                    if next != '"' && next != '\\' {
                        current.push('\\');
                    }
                    current.push(next);
                }
                _ => current.push(c),
            },
            Quote::None => match c {
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    current.push(next);
                    in_word = true;
                }
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                c if is_blank(c) => {
                    if in_word {
                        tokens.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    match quote {
        Quote::Single => return Err(TokenizeError::UnterminatedQuote('\'')),
        Quote::Double => return Err(TokenizeError::UnterminatedQuote('"')),
        Quote::None => {}
    }

    if in_word {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Final path segment of a command word (`/usr/bin/sudo` -> `sudo`).
pub fn basename(token: &str) -> &str {
    token.rsplit('/').next().unwrap_or(token)
}
