//! Phase 4 tests: CLI integration and end-to-end flows.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

// ==================== CLI Helpers ====================

/// Locate the `isconnected` binary built alongside test binaries.
fn isconnected_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_isconnected"))
}

/// Run the CLI with the given arguments and return the output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(isconnected_bin())
        .args(args)
        .output()
        .expect("Failed to run isconnected")
}

/// Run the CLI with the given arguments and stdin contents.
fn run_cli_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(isconnected_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run isconnected");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Run the CLI with an extra environment variable set.
fn run_cli_with_env(args: &[&str], key: &str, value: &str) -> Output {
    Command::new(isconnected_bin())
        .args(args)
        .env(key, value)
        .output()
        .expect("Failed to run isconnected")
}

/// Write a map file to a temporary location.
fn write_map(text: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(text.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "isconnected failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const EXAMPLE_MAP: &str = "# comment\n3\nAAA BBB\nBBB CCC\n";

// ==================== CLI Tests ====================

#[test]
fn test_cli_query_session() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_input(&["query", path], "AAA CCC\nCCC AAA\nAAA ZZZ\nquit\n");
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("There is a path from AAA to CCC."));
    assert!(out.contains("There is no path from CCC to AAA."));
    assert!(out.contains("Unknown city: ZZZ"));
    assert!(out.contains("Normal exit."));
}

#[test]
fn test_cli_map_argument_starts_session() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_input(&[path], "AAA CCC\nCCC AAA\nquit\n");
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("There is a path from AAA to CCC."));
    assert!(out.contains("There is no path from CCC to AAA."));
    assert!(out.contains("Normal exit."));
}

#[test]
fn test_cli_map_argument_with_json() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_input(&["--format", "json", path], "CCC AAA\nquit\n");
    assert_success(&output);
    let answer: serde_json::Value = serde_json::from_str(stdout_str(&output).trim()).unwrap();
    assert_eq!(answer["connected"], false);
}

#[test]
fn test_cli_query_json() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_input(&["--format", "json", "query", path], "BBB CCC\nquit\n");
    assert_success(&output);
    let answer: serde_json::Value = serde_json::from_str(stdout_str(&output).trim()).unwrap();
    assert_eq!(answer["connected"], true);
}

#[test]
fn test_cli_check() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli(&["check", path, "AAA", "CCC"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "There is a path from AAA to CCC.");

    let output = run_cli(&["check", path, "CCC", "AAA"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "There is no path from CCC to AAA.");
}

#[test]
fn test_cli_check_unknown_city() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli(&["check", path, "AAA", "ZZZ"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown city: ZZZ"));
}

#[test]
fn test_cli_reach() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli(&["--format", "json", "reach", path, "BBB"]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["origin"], "BBB");
    assert_eq!(result["reachable"], serde_json::json!(["BBB", "CCC"]));
}

#[test]
fn test_cli_info() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli(&["info", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Nodes: 3"));
    assert!(out.contains("Edges: 2"));
    assert!(out.contains("Node 0: AAA"));
    assert!(out.contains("Node 2: CCC"));
}

#[test]
fn test_cli_missing_argument() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["query"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_rust_log_without_verbose() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_env(&["info", path], "RUST_LOG", "debug");
    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Built graph with 3 nodes and 2 edges"));
}

#[test]
fn test_cli_quiet_by_default() {
    let map = write_map(EXAMPLE_MAP);
    let path = map.path().to_str().unwrap();

    let output = Command::new(isconnected_bin())
        .args(["info", path])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_missing_file() {
    let output = run_cli(&["info", "/nonexistent/airmap.map"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_malformed_map() {
    let map = write_map("AAA BBB\nCCC\n");
    let path = map.path().to_str().unwrap();

    let output = run_cli(&[path]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn test_cli_empty_map() {
    let map = write_map("# empty\n\n0\n");
    let path = map.path().to_str().unwrap();

    let output = run_cli_with_input(&[path], "AAA BBB\nquit\n");
    assert_success(&output);
    assert!(stdout_str(&output).contains("Unknown city: AAA"));
}
