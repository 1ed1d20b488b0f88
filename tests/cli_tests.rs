// Drives the built binary end to end

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_orders-to-struct"))
}

fn run_with(args: &[&OsStr]) -> Output {
    Command::new(bin())
        .args(args)
        .env_remove("ORDERS_TO_STRUCT_LOG")
        .output()
        .expect("Failed to spawn binary")
}

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("orders.txt");
    fs::write(&path, content).expect("Failed to write order file");
    path
}

#[test]
fn test_usage_without_arguments() {
    let output = run_with(&[]);

    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: "), "got {:?}", stdout);
    assert!(stdout.contains("orders-to-struct"));
    assert!(stdout.trim_end().ends_with("ORDER_FILE"));
}

#[test]
fn test_transcodes_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Order 1:\nfoo\nbar\nendOfOrder\n");

    let output = run_with(&[input.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "const char* order_1[] = {\n    \"foo\",\n    \"bar\",\n    \"endOfOrder\",\n    };\n\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "X9:\nendOfOrder\n");

    let output = run_with(&[input.as_os_str(), OsStr::new("--extra"), OsStr::new("more")]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("const char* order_9[] = {"));
}

#[test]
fn test_empty_line_fails_after_partial_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Order 1:\nfoo\n\nbar\nendOfOrder\n");

    let output = run_with(&[input.as_os_str()]);

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "const char* order_1[] = {\n    \"foo\",\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3: empty line"));
    assert!(stderr.contains("warning: order_1 opened at line 1"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = run_with(&[missing.as_os_str()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_log_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Order 2:\nendOfOrder\n");
    let log_path = dir.path().join("run.jsonl");

    let output = Command::new(bin())
        .arg(&input)
        .env("ORDERS_TO_STRUCT_LOG", &log_path)
        .output()
        .expect("Failed to spawn binary");

    assert!(output.status.success());
    let log = fs::read_to_string(&log_path).unwrap();
    assert_eq!(log.lines().count(), 4);
    assert!(log.lines().last().unwrap().contains("\"event\":\"finished\""));
}
