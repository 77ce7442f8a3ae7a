//! Integration tests for the snapview CLI
//!
//! These tests exercise the `dump` and `completion` commands end-to-end
//! against real snapshot files in a temporary directory. The interactive TUI
//! needs a terminal and is not driven here; everything it renders goes
//! through the same row pipeline `dump` uses.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run snapview against a snapshot file
fn run_snapview(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_snapview"))
        .args(args)
        .output()
        .expect("Failed to execute snapview")
}

/// Helper to get stdout as string
fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_snapshot(dir: &Path, contents: &str) -> String {
    let path = dir.join("snapshot.json");
    fs::write(&path, contents).expect("write snapshot fixture");
    path.to_string_lossy().to_string()
}

const SNAPSHOT: &str = r#"{
    "logs": [
        {
            "timestamp": "2024-05-01T10:00:00Z",
            "body": "listener started",
            "severity": "info",
            "attributes": {"port": 8080},
            "resource": {"host.name": "web-1"}
        },
        {
            "timestamp": "2024-05-01T10:00:05Z",
            "body": "connection refused",
            "severity": "verbose"
        }
    ],
    "metrics": [
        {
            "timestamp": "2024-05-01T10:00:00Z",
            "name": "system.memory.usage",
            "value": 512.0,
            "type": "Gauge",
            "unit": "MiB"
        }
    ],
    "traces": [
        {
            "start": "2024-05-01T10:00:00.000Z",
            "end": "2024-05-01T10:00:01.250Z",
            "name": "GET /items",
            "spanID": "aaa111",
            "parentSpanID": "",
            "traceID": "ccc333"
        }
    ]
}"#;

// =============================================================================
// Basic Command Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_snapview(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("snapview"));
    assert!(out.contains("snapshot console"));
}

#[test]
fn test_version_command() {
    let output = run_snapview(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("snapview"));
}

#[test]
fn test_missing_snapshot_file_fails() {
    let output = run_snapview(&["dump", "/nonexistent/snapshot.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read snapshot"));
}

#[test]
fn test_malformed_snapshot_fails_fast() {
    let dir = TempDir::new().unwrap();
    // A trace record with no start/end must be rejected at load time.
    let path = write_snapshot(
        dir.path(),
        r#"{"traces": [{"name": "orphan", "spanID": "s", "traceID": "t"}]}"#,
    );

    let output = run_snapview(&["dump", &path, "--pipeline", "traces"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("malformed snapshot"));
}

// =============================================================================
// Dump Rendering Tests
// =============================================================================

#[test]
fn test_dump_logs_newest_first_with_year_free_timestamps() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), SNAPSHOT);

    let output = run_snapview(&["dump", &path, "--timezone", "utc"]);
    assert!(output.status.success(), "dump failed: {}", stderr(&output));
    let out = stdout(&output);

    // Newest log first.
    let newest = out.find("connection refused").unwrap();
    let oldest = out.find("listener started").unwrap();
    assert!(newest < oldest);

    // Display dates carry a zone but no year.
    assert!(out.contains("May 01 10:00:05 UTC"));
    assert!(!out.contains("2024"));

    // Collapsed rows only: no detail sections.
    assert!(!out.contains("Attributes"));
}

#[test]
fn test_dump_open_expands_detail_blocks() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), SNAPSHOT);

    let output = run_snapview(&["dump", &path, "--open", "--timezone", "utc"]);
    assert!(output.status.success());
    let out = stdout(&output);

    assert!(out.contains("Log"));
    assert!(out.contains("Attributes"));
    assert!(out.contains("port"));
    assert!(out.contains("8080"));
    assert!(out.contains("host.name"));
    // Second log has no maps at all.
    assert!(out.contains("No attribute values"));
    assert!(out.contains("No resource values"));
    // Unrecognized severity "verbose" displays as its classified category.
    assert!(out.contains("default"));
    assert!(!out.contains("verbose"));
}

#[test]
fn test_dump_metrics_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), SNAPSHOT);

    let output = run_snapview(&[
        "dump",
        &path,
        "--pipeline",
        "metrics",
        "--open",
        "--timezone",
        "utc",
    ]);
    assert!(output.status.success());
    let out = stdout(&output);

    assert!(out.contains("system.memory.usage"));
    assert!(out.contains("512 MiB"));
    assert!(out.contains("Gauge"));
    assert!(!out.contains("listener started"), "logs stay on their tab");
}

#[test]
fn test_dump_traces_pipeline_duration_and_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), SNAPSHOT);

    let output = run_snapview(&[
        "dump",
        &path,
        "--pipeline",
        "traces",
        "--open",
        "--timezone",
        "utc",
    ]);
    assert!(output.status.success());
    let out = stdout(&output);

    assert!(out.contains("GET /items"));
    assert!(out.contains("1250 ms"));
    assert!(out.contains("aaa111"));
    assert!(out.contains("ccc333"));
    // Span detail keeps raw ISO instants.
    assert!(out.contains("2024-05-01T10:00:00.000Z"));
}

#[test]
fn test_dump_empty_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), r#"{"logs": []}"#);

    let output = run_snapview(&["dump", &path, "--pipeline", "traces"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No recent traces");
}

#[test]
fn test_dump_rejects_bad_timezone() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), SNAPSHOT);

    let output = run_snapview(&["dump", &path, "--timezone", "PST"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid timezone"));
}

// =============================================================================
// Shell Completion Tests
// =============================================================================

#[test]
fn test_completion_zsh() {
    let output = run_snapview(&["completion", "zsh"]);
    assert!(
        output.status.success(),
        "completion zsh failed: {}",
        stderr(&output)
    );
    assert!(
        stdout(&output).contains("#compdef snapview"),
        "zsh completion should contain #compdef"
    );
}

#[test]
fn test_completion_bash() {
    let output = run_snapview(&["completion", "bash"]);
    assert!(
        output.status.success(),
        "completion bash failed: {}",
        stderr(&output)
    );
    assert!(
        stdout(&output).contains("_snapview"),
        "bash completion should contain _snapview function"
    );
}
