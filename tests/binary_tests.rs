use std::process::Command;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_example-operation");

#[test]
fn test_binary_usage_error() {
    let output = Command::new(BIN)
        .env_remove("RUST_LOG")
        .arg("a.txt")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Usage: "));
    assert!(stderr.trim_end().ends_with("<input> <output>"));
}

#[test]
fn test_binary_without_arguments() {
    let output = Command::new(BIN)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_binary_success_is_silent_and_touches_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.txt");
    let output_path = dir.path().join("b.txt");

    let output = Command::new(BIN)
        .env_remove("RUST_LOG")
        .arg(&input)
        .arg(&output_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(!input.exists());
    assert!(!output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_binary_accepts_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let input = dir.path().join(OsStr::from_bytes(b"in\xff.txt"));
    let output_path = dir.path().join("o");

    let output = Command::new(BIN)
        .env_remove("RUST_LOG")
        .arg(&input)
        .arg(&output_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert!(!output_path.exists());
}
