//! Git Safety Guard - PreToolUse hook entry point.
//!
//! Everything here fails open: unreadable input, malformed JSON, other tools
//! and internal faults all let the command through. Only the detectors
//! themselves lean toward blocking.

use git_safety_guard::analysis::analyze_bash;
use git_safety_guard::audit::AuditLogger;
use git_safety_guard::config::{CompiledConfig, Config};
use git_safety_guard::decision::Decision;
use git_safety_guard::input::HookInput;
use git_safety_guard::output::format_response;

use std::io::{self, Read};
use std::panic;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Read JSON from stdin
    let mut input_str = String::new();
    if io::stdin().read_to_string(&mut input_str).is_err() {
        return pass_through();
    }
    if input_str.trim().is_empty() {
        return pass_through();
    }

    match panic::catch_unwind(|| run(&input_str)) {
        Ok(Some(response)) => {
            println!("{}", response);
            ExitCode::SUCCESS
        }
        _ => pass_through(),
    }
}

/// Allow without output: the host proceeds as if the hook were absent.
fn pass_through() -> ExitCode {
    ExitCode::SUCCESS
}

/// Evaluate one hook invocation, returning the deny response if any.
fn run(input_str: &str) -> Option<String> {
    let hook_input = HookInput::parse(input_str).ok()?;
    let bash_input = hook_input.as_bash()?;

    let cwd = hook_input.cwd.as_deref().map(Path::new);
    let config = load_config(cwd);

    let decision = analyze_bash(&bash_input, &config);

    if let Some(path) = config.audit_path() {
        write_audit(path, &hook_input, &decision);
    }

    format_response(&decision, &bash_input.command)
}

/// Load and compile config. Problems are reported and the defaults used, so
/// the built-in detectors still run.
fn load_config(cwd: Option<&Path>) -> CompiledConfig {
    match Config::load(cwd).and_then(Config::compile) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("git-safety-guard: config error: {}", e);
            CompiledConfig::default()
        }
    }
}

fn write_audit(path: &Path, input: &HookInput, decision: &Decision) {
    let result = AuditLogger::open(path).and_then(|mut logger| logger.log_decision(input, decision));
    if let Err(e) = result {
        eprintln!("git-safety-guard: audit log error: {}", e);
    }
}
