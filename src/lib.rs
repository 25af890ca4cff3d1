//! Git Safety Guard - PreToolUse hook that vetoes destructive shell commands.
//!
//! Given a shell command, decides whether it is likely to lose data
//! irreversibly (discarding uncommitted work, deleting outside temp space,
//! rewriting remote history) and blocks it with a reason.

pub mod analysis;
pub mod audit;
pub mod config;
pub mod decision;
pub mod input;
pub mod output;
pub mod rules;
pub mod shell;

pub use analysis::{analyze_bash, evaluate, evaluate_with_rules};
pub use config::{CompiledConfig, Config};
pub use decision::{BlockInfo, Decision};
pub use input::HookInput;
pub use output::format_response;
