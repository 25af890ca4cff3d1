//! Shell command parsing.

mod nested;
mod operators;
mod tokenizer;
mod wrappers;

pub use nested::{SHELL_INTERPRETERS, unwrap_shell_dash_c};
pub use operators::{SHELL_OPERATORS, has_shell_operators};
pub use tokenizer::{TokenizeError, basename, tokenize};
pub use wrappers::{is_assignment, strip_wrappers};
