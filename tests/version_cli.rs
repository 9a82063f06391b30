//! Binary-level tests for `pho-release version`.
//!
//! Each test lays out a scratch application root with a `core/meta.go` and
//! points the binary at it through `PHO_ROOT`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const META_GO: &str = r#"package core

const (
	AppName    = "pho"
	AppVersion = "2.10.33"
)

var AppDescription = "AppImage manager, version 0.0.0"
"#;

fn write_meta(root: &Path, content: &str) {
    fs::create_dir_all(root.join("core")).expect("Failed to create core/");
    fs::write(root.join("core").join("meta.go"), content).expect("Failed to write meta.go");
}

fn run_version(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pho-release"))
        .arg("version")
        .args(args)
        .env("PHO_ROOT", root)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute pho-release")
}

#[test]
fn test_prints_bare_version() {
    let root = tempfile::tempdir().unwrap();
    write_meta(root.path(), META_GO);

    let output = run_version(root.path(), &[]);

    assert!(
        output.status.success(),
        "version failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.10.33\n");
}

#[test]
fn test_prints_tag() {
    let root = tempfile::tempdir().unwrap();
    write_meta(root.path(), META_GO);

    let output = run_version(root.path(), &["--tag"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "v2.10.33\n");
}

#[test]
fn test_output_is_identical_across_runs() {
    let root = tempfile::tempdir().unwrap();
    write_meta(root.path(), META_GO);

    let first = run_version(root.path(), &[]);
    let second = run_version(root.path(), &[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn test_missing_pattern_fails_without_stdout() {
    let root = tempfile::tempdir().unwrap();
    write_meta(root.path(), "package core\n\nconst AppVersion = \"2.10\"\n");

    let output = run_version(root.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout must stay empty on failure");
    assert!(stderr.contains("Version pattern not found"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_is_reported_as_unreadable() {
    let root = tempfile::tempdir().unwrap();

    let output = run_version(root.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("unreadable"), "stderr: {}", stderr);
    assert!(!stderr.contains("not found in"), "stderr: {}", stderr);
}
