//! CLI integration tests for the list command and top-level flags

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ggst-team"))
        .args(args)
        .env_remove("GGST_TEAM_LOG")
        .output()
        .expect("Failed to execute ggst-team")
}

#[test]
fn test_list_prints_catalog() {
    let output = run(&["list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total: 32 characters"));
    assert!(stdout.lines().any(|l| l.starts_with("sol ") && l.contains("ソル")));
    assert!(stdout.lines().any(|l| l.starts_with("nagoriyuki") && l.contains("nago")));
}

#[test]
fn test_no_command_shows_help() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("generate"));
}

#[test]
fn test_help_flag() {
    for flag in ["-h", "--help"] {
        let output = run(&[flag]);
        assert!(output.status.success(), "{} should exit 0", flag);
        assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    }
}

#[test]
fn test_help_short_circuits_generate() {
    let output = run(&["generate", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--members"));
}

#[test]
fn test_version_flag() {
    for flag in ["-v", "--version"] {
        let output = run(&[flag]);
        assert!(output.status.success(), "{} should exit 0", flag);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_version_flag_after_subcommand() {
    for args in [["list", "-v"], ["generate", "--version"]] {
        let output = run(&args);
        assert!(output.status.success(), "{:?} should exit 0", args);
        assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_unknown_command_falls_back_to_help() {
    let output = run(&["frobnicate"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}
