//! Integration tests for the git-safety-guard binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test config file.
fn create_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("git-safety-guard.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Get a command with config path set via env var.
fn cmd_with_config(config_path: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("git-safety-guard");
    cmd.env("GIT_SAFETY_GUARD_CONFIG", config_path);
    cmd
}

/// Get a command pointing at a config file that does not exist.
fn cmd_without_config(home: &TempDir) -> assert_cmd::Command {
    cmd_with_config(&home.path().join("nonexistent.toml"))
}

fn bash_input(command: &str) -> String {
    serde_json::json!({
        "tool_name": "Bash",
        "tool_input": {"command": command},
    })
    .to_string()
}

fn deny_reason(stdout: &[u8]) -> String {
    let parsed: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    let output = &parsed["hookSpecificOutput"];
    assert_eq!(output["hookEventName"], "PreToolUse");
    assert_eq!(output["permissionDecision"], "deny");
    output["permissionDecisionReason"].as_str().unwrap().to_string()
}

#[test]
fn test_allow_safe_command() {
    let dir = TempDir::new().unwrap();

    cmd_without_config(&dir)
        .write_stdin(bash_input("ls -la"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_deny_rm_rf_root() {
    let dir = TempDir::new().unwrap();

    let assert = cmd_without_config(&dir)
        .write_stdin(bash_input("rm -rf /"))
        .assert()
        .success();

    let reason = deny_reason(&assert.get_output().stdout);
    assert!(reason.contains("BLOCKED by git-safety-guard"));
    assert!(reason.contains("outside temporary directories"));
    assert!(reason.contains("Command: rm -rf /"));
    assert!(reason.contains("explicit permission"));
}

#[test]
fn test_deny_nested_force_push() {
    let dir = TempDir::new().unwrap();

    let assert = cmd_without_config(&dir)
        .write_stdin(bash_input("sudo bash -lc \"git push --force\""))
        .assert()
        .success();

    let reason = deny_reason(&assert.get_output().stdout);
    assert!(reason.contains("Force push rewrites remote history"));
}

#[test]
fn test_allow_rm_in_tmp() {
    let dir = TempDir::new().unwrap();

    cmd_without_config(&dir)
        .write_stdin(bash_input("rm -rf /tmp/build"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_other_tool_passes_through() {
    let dir = TempDir::new().unwrap();
    let input = r#"{"tool_name":"Write","tool_input":{"command":"rm -rf /"}}"#;

    cmd_without_config(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_json_fails_open() {
    let dir = TempDir::new().unwrap();

    cmd_without_config(&dir)
        .write_stdin("not valid json")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_input_fails_open() {
    let dir = TempDir::new().unwrap();

    cmd_without_config(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_command_fails_open() {
    let dir = TempDir::new().unwrap();

    cmd_without_config(&dir)
        .write_stdin(r#"{"tool_name":"Bash","tool_input":{}}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_configured_deny_rule() {
    let dir = TempDir::new().unwrap();
    let config = create_config(
        &dir,
        r#"
[[deny]]
name = "git.filter_branch"
pattern = 'git\s+filter-branch'
reason = "Rewrites the whole history"
"#,
    );

    let assert = cmd_with_config(&config)
        .write_stdin(bash_input("git filter-branch --all"))
        .assert()
        .success();

    let reason = deny_reason(&assert.get_output().stdout);
    assert!(reason.contains("Rewrites the whole history"));
}

#[test]
fn test_invalid_config_keeps_builtin_rules() {
    let dir = TempDir::new().unwrap();
    let config = create_config(
        &dir,
        r#"
[[deny]]
pattern = '[invalid'
reason = "broken"
"#,
    );

    let assert = cmd_with_config(&config)
        .write_stdin(bash_input("git reset --hard"))
        .assert()
        .success()
        .stderr(predicate::str::contains("config error"));

    let reason = deny_reason(&assert.get_output().stdout);
    assert!(reason.contains("Destroys all uncommitted modifications"));
}

#[test]
fn test_project_config_from_cwd() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(".git-safety-guard.toml"),
        r#"
[[deny]]
pattern = 'terraform\s+destroy'
reason = "Destroys infrastructure"
"#,
    )
    .unwrap();

    let input = serde_json::json!({
        "tool_name": "Bash",
        "tool_input": {"command": "terraform destroy"},
        "cwd": project.path(),
    })
    .to_string();

    let assert = cmd_without_config(&home)
        .write_stdin(input)
        .assert()
        .success();

    let reason = deny_reason(&assert.get_output().stdout);
    assert!(reason.contains("Destroys infrastructure"));
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("audit.jsonl");
    let config = create_config(
        &dir,
        &format!(
            "[audit]\nenabled = true\npath = {:?}\n",
            log_path.to_string_lossy()
        ),
    );

    cmd_with_config(&config)
        .write_stdin(bash_input("git stash clear"))
        .assert()
        .success();
    cmd_with_config(&config)
        .write_stdin(bash_input("git status"))
        .assert()
        .success();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"rule\":\"git.stash.clear\""));
    assert!(lines[1].contains("\"blocked\":false"));
}
