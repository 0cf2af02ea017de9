//! Integration tests for the sograph CLI
//!
//! These tests run the sograph binary end to end.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const CHAIN: &str = "add 1\nadd 2\nadd 3\nadd 4\nadd 5\n\
                     edges 1 2\nedges 1 3\nedges 2 4\nedges 4 5\n";

/// Get a Command for sograph, isolated from any user config
fn sograph(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sograph");
    cmd.env("SOGRAPH_CONFIG_DIR", config_dir)
        .env_remove("SOGRAPH_CONFIG")
        .env_remove("SOGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sograph"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("hops"))
        .stdout(predicate::str::contains("groups"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sograph"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sograph --help"));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_from_stdin() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("run")
        .write_stdin(format!("{CHAIN}hops 1 5\nhops 1 1\nhops 5 1\n"))
        .assert()
        .success()
        .stdout("1 -> 5: 3 hops\n1 -> 1: 0 hops\n5 -> 1: unreachable\n");
}

#[test]
fn test_run_stop_and_summary() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .args(["run", "-", "--summary"])
        .write_stdin("add alice\nedges alice bob\nstop\nadd carol\n")
        .assert()
        .success()
        .stdout("alice\nbob\n");
}

#[test]
fn test_run_summary_suppressed_by_quiet() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .args(["run", "--summary", "--quiet"])
        .write_stdin("add alice\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_run_script_file_records() {
    let dir = tempdir().unwrap();
    let script = write_script(
        &dir,
        "chain.txt",
        &format!("{CHAIN}path 1 5\nneighbors 4\n"),
    );

    sograph(dir.path())
        .args(["--format", "records", "run"])
        .arg(&script)
        .assert()
        .success()
        .stdout("P from=1 to=5 hops=3 path=1,2,4,5\nN from=4 to=5 weight=0\n");
}

#[test]
fn test_run_json_lines() {
    let dir = tempdir().unwrap();
    let output = sograph(dir.path())
        .args(["--format", "json", "run"])
        .write_stdin("edges a b\nedges c d\nhops a d\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "hops");
    assert_eq!(value["hops"]["status"], "unreachable");
}

#[test]
fn test_run_missing_vertex_exits_3() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("run")
        .write_stdin("add a\nhops a missing\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: vertex not found: missing"));
}

#[test]
fn test_run_bad_line_exits_3() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("run")
        .write_stdin("add a\nfollow a b\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("script line 2: unknown command: follow"));
}

#[test]
fn test_run_missing_script_file_fails() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("run")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open script"));
}

// ============================================================================
// Re-add policy
// ============================================================================

#[test]
fn test_readd_replace_is_default() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("run")
        .write_stdin("edges a b\nadd a\nhops a b\n")
        .assert()
        .success()
        .stdout("a -> b: unreachable\n");
}

#[test]
fn test_readd_keep_flag() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .args(["--readd-policy", "keep", "run"])
        .write_stdin("edges a b\nadd a\nhops a b\n")
        .assert()
        .success()
        .stdout("a -> b: 1 hop\n");
}

#[test]
fn test_readd_reject_from_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[graph]\nreadd_policy = \"reject\"\n",
    )
    .unwrap();

    sograph(dir.path())
        .arg("run")
        .write_stdin("add a\nadd a\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex already exists: a"));
}

#[test]
fn test_default_weight_from_explicit_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[graph]\ndefault_weight = 4.5\n").unwrap();

    sograph(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("run")
        .write_stdin("edges a b\nneighbors a\n")
        .assert()
        .success()
        .stdout("a -> b (weight 4.5)\n");
}

#[test]
fn test_invalid_readd_policy_is_usage_error() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .args(["--readd-policy", "merge", "demo"])
        .assert()
        .code(2);
}

// ============================================================================
// One-shot queries
// ============================================================================

#[test]
fn test_hops_command() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "chain.txt", CHAIN);

    sograph(dir.path())
        .args(["hops", "1", "5", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("1 -> 5: 3 hops\n");
}

#[test]
fn test_hops_disjoint_components() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "pairs.txt", "edges A B\nedges C D\n");

    sograph(dir.path())
        .args(["--format", "records", "hops", "A", "D", "-s"])
        .arg(&script)
        .assert()
        .success()
        .stdout("H from=A to=D hops=unreachable\n");
}

#[test]
fn test_path_command() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "chain.txt", CHAIN);

    sograph(dir.path())
        .args(["path", "1", "5", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("1 -> 2 -> 4 -> 5\n");
}

#[test]
fn test_groups_command() {
    let dir = tempdir().unwrap();
    let script = write_script(
        &dir,
        "friends.txt",
        "edges 0 1\nedges 4 2\nedges 4 3\nedges 4 5\nedges 8 6\nedges 8 7\nedges 7 6\n",
    );

    sograph(dir.path())
        .args(["groups", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("3 friend group(s)\n  1: 0 1\n  2: 2 3 4 5\n  3: 6 7 8\n");
}

#[test]
fn test_query_missing_vertex_json_error() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "chain.txt", CHAIN);

    let output = sograph(dir.path())
        .args(["--format", "json", "hops", "1", "ghost", "--script"])
        .arg(&script)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["type"], "vertex_not_found");
    assert_eq!(value["error"]["message"], "vertex not found: ghost");
}

#[test]
fn test_usage_error_with_json_format() {
    let dir = tempdir().unwrap();
    let output = sograph(dir.path())
        .args(["--format", "json", "hops", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["type"], "usage_error");
}

// ============================================================================
// demo
// ============================================================================

const DEMO_OUTPUT: &str = "1\n2\n3\n4\n5\n\
                           1 -> 2 (weight 0)\n1 -> 3 (weight 0)\n\
                           1 -> 5: 3 hops\n5 -> 1: unreachable\n";

#[test]
fn test_demo() {
    let dir = tempdir().unwrap();
    sograph(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(DEMO_OUTPUT);
}
