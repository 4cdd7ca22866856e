//! CLI smoke tests for the task-manager-server binary
//!
//! Covers help/version output, configuration validation and a short-lived
//! server start against an in-memory database.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Run the binary with the given arguments.
fn run_server_bin(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_task-manager-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute task-manager-server")
}

/// Run the binary, giving up after `timeout_duration`; the child is killed on timeout.
async fn run_server_bin_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_task-manager-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

/// Write a config file whose home_dir lives inside `dir`.
fn write_config(dir: &Path, name: &str, body: &str) -> String {
    let home = dir.join("home").to_string_lossy().replace('\\', "/");
    let content = format!(
        r#"
server:
  home_dir: "{home}"
  host: "127.0.0.1"
  port: 0
{body}
"#
    );
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_string_lossy().to_string()
}

const LOGGING: &str = r#"
logging:
  default:
    console_level: info
    file: "logs/task_manager.log"
    file_level: info
    max_age_days: 28
    max_backups: 3
    max_size_mb: 100
"#;

#[test]
fn test_cli_help_command() {
    let output = run_server_bin(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("task-manager-server"), "Should contain binary name");
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server_bin(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("task-manager-server"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server_bin(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should report the invalid command: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_server_bin(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file not found"),
        "Should mention the missing config file: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");
    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_server_bin(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config") || stderr.contains("yaml") || stderr.contains("parse"),
        "Should mention the YAML problem: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let body = format!(
        r#"
database:
  url: "sqlite://database/task_manager.db"
modules:
  task_manager:
    default_page_limit: 50
    max_page_limit: 500
{LOGGING}"#
    );
    let config_path = write_config(temp_dir.path(), "valid.yaml", &body);

    let output = run_server_bin(&["--config", &config_path, "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration check passed"),
        "Should report success: {}",
        stdout
    );
}

#[test]
fn test_cli_check_rejects_inverted_page_limits() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let body = r#"
modules:
  task_manager:
    default_page_limit: 500
    max_page_limit: 50
"#;
    let config_path = write_config(temp_dir.path(), "limits.yaml", body);

    let output = run_server_bin(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with inverted limits");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_page_limit"), "stderr: {}", stderr);
}

#[test]
fn test_cli_check_rejects_unknown_database_scheme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let body = r#"
database:
  url: "redis://localhost:6379"
"#;
    let config_path = write_config(temp_dir.path(), "redis.yaml", body);

    let output = run_server_bin(&["--config", &config_path, "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported database type"), "stderr: {}", stderr);
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "print.yaml", LOGGING);

    let output = run_server_bin(&["--config", &config_path, "--port", "9123", "--print-config"]);

    assert!(output.status.success(), "Print config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"), "stdout: {}", stdout);
    assert!(stdout.contains("9123"), "Port override should be applied");
}

#[tokio::test]
async fn test_cli_run_command_with_mock_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "run.yaml", LOGGING);

    let result = run_server_bin_with_timeout(
        &["--config", &config_path, "--mock", "run"],
        Duration::from_secs(5),
    )
    .await;

    // A running server never exits on its own, so the timeout must fire.
    match result {
        Err(e) => assert!(
            e.to_string().contains("elapsed") || e.to_string().contains("deadline"),
            "Unexpected error: {}",
            e
        ),
        Ok(output) => panic!(
            "Server exited early: status={:?} stderr={}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}
