use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const MISMATCHED: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "166270" },
    "2": { "base": "10", "value": "585182" },
    "3": { "base": "10", "value": "1716161" },
    "4": { "base": "10", "value": "5971876" }
}"#;

fn jester_recover_logging(input: &Path, log_level: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jester_recover"))
        .arg(input)
        .env_remove("RUST_LOG")
        .env_remove("JESTER_DOMAIN")
        .env_remove("JESTER_MODULUS")
        .env_remove("JESTER_FORMAT")
        .env("JESTER_LOG", log_level)
        .output()
        .unwrap()
}

fn jester_recover(input: &Path) -> Output {
    jester_recover_logging(input, "off")
}

fn share_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("shares.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_wrong_shares_exit_zero() {
    let dir = TempDir::new().unwrap();
    let path = share_file(&dir, MISMATCHED);

    let output = jester_recover(&path);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Secret (constant term): 459425"));
    assert!(stdout.contains("4 | 5971876 |  3559207"));
}

#[test]
fn test_missing_file_exit_one() {
    let dir = TempDir::new().unwrap();
    let output = jester_recover(&dir.path().join("nope.json"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: cannot read "));
    assert!(stderr.contains("nope.json: "));
}

#[test]
fn test_invalid_digit_exit_one() {
    let dir = TempDir::new().unwrap();
    let path = share_file(
        &dir,
        r#"{
            "keys": { "n": 2, "k": 1 },
            "1": { "base": "10", "value": "12" },
            "2": { "base": "8", "value": "19" }
        }"#,
    );

    let output = jester_recover(&path);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error: cannot reconstruct the secret: share 2 has an invalid value: \
         invalid digit '9' at position 1 for base 8\n"
    );
}

/// Logs on a piped stderr are plain text.
#[test]
fn test_logs_without_colors() {
    let dir = TempDir::new().unwrap();
    let path = share_file(&dir, MISMATCHED);

    let output = jester_recover_logging(&path, "warn");
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("share does not lie on the reconstructed polynomial"));
    assert!(!stderr.contains('\x1b'));
}
