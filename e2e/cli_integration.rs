// e2e/cli_integration.rs: CLI integration tests
//
// Tests the `tpcfix` binary as a black box: argument handling, exit status,
// and the progress markers on stdout.

#[path = "common.rs"]
mod common;

use std::fs;

use common::{run, stderr, stdout, write_container};
use tempfile::TempDir;
use tpcfix::tape::ContainerBuilder;

// ── 1. Documented example container ──────────────────────────────────────────

#[test]
fn test_cli_two_files_progress() {
    let dir = TempDir::new().unwrap();
    let input = write_container(
        dir.path(),
        "in.tpc",
        ContainerBuilder::new().pattern_file(10, 3).pattern_file(20, 2).end(),
    );
    let output = dir.path().join("out.tpc");

    let out = run([&input, &output]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "File 1 of block size 0x000a... EOF\nFile 2 of block size 0x0014.. EOF\nEOF\n"
    );
    assert_eq!(fs::read(&output).unwrap().len(), 3 * 12 + 2 + 2 * 22 + 2 + 2);
}

// ── 2. Usage ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_aborts() {
    let out = run(Vec::<&str>::new());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage"), "stderr: {}", stderr(&out));
}

#[test]
fn test_cli_three_arguments_aborts() {
    let out = run(["a.tpc", "b.tpc", "c.tpc"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_cli_help() {
    let out = run(["--help"]);
    assert!(out.status.success());
    assert!(stdout(&out).to_lowercase().contains("usage"));
}

#[test]
fn test_cli_version() {
    let out = run(["--version"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(tpcfix::TPCFIX_VERSION_STRING));
}

// ── 3. Flags ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", ContainerBuilder::new().pattern_file(8, 4).end());
    let output = dir.path().join("out.tpc");

    let out = run([input.as_os_str(), "-q".as_ref(), output.as_os_str()]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).is_empty());
}

#[test]
fn test_cli_verbose_logs_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", ContainerBuilder::new().pattern_file(8, 4).end());
    let output = dir.path().join("out.tpc");

    let out = run(["-v".as_ref(), input.as_os_str(), output.as_os_str()]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("1 files, 6 records"), "stderr: {}", stderr(&out));
}

#[test]
fn test_cli_verify_word_aligned() {
    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", ContainerBuilder::new().pattern_file(101, 9).end());
    let output = dir.path().join("out.tpc");

    let out = run([
        "--verify".as_ref(),
        "--framing".as_ref(),
        "word-aligned".as_ref(),
        input.as_os_str(),
        output.as_os_str(),
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(fs::read(&output).unwrap().len() % 2, 0);
}
