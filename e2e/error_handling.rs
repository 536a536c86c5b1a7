// e2e/error_handling.rs: abort paths of the binary
//
// Every failure exits with status 1 and a message on stderr.

#[path = "common.rs"]
mod common;

use std::fs;

use common::{run, stderr, stdout, write_container};
use tempfile::TempDir;
use tpcfix::tape::ContainerBuilder;

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let out = run([dir.path().join("nope.tpc"), dir.path().join("out.tpc")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Cannot open input file"));
    assert!(!dir.path().join("out.tpc").exists());
}

#[test]
fn test_input_not_fixed_512() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tpc");
    fs::write(&input, vec![0u8; 513]).unwrap();
    let out = run([input, dir.path().join("out.tpc")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Expected input file of fixed 512b record size"));
}

#[test]
fn test_output_exists() {
    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", ContainerBuilder::new().pattern_file(4, 1).end());
    let output = dir.path().join("out.tpc");
    fs::write(&output, b"old").unwrap();

    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Cannot create output file"));
    assert_eq!(fs::read(&output).unwrap(), b"old");
}

#[test]
fn test_truncated_container() {
    let dir = TempDir::new().unwrap();
    let input = write_container(
        dir.path(),
        "in.tpc",
        ContainerBuilder::new().record(&[1u8; 510]),
    );
    let out = run([input, dir.path().join("out.tpc")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unexpected End of File"));
    assert!(stderr(&out).contains("is not a well-formed container"));
}

#[test]
fn test_bogus_block_size() {
    let dir = TempDir::new().unwrap();
    let input = write_container(
        dir.path(),
        "in.tpc",
        ContainerBuilder::new()
            .record(&[1u8; 16])
            .record(&[2u8; 32])
            .terminator()
            .end(),
    );
    let output = dir.path().join("out.tpc");
    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).ends_with("!\nBogus block of size 0x0020.\n"));
    assert!(stderr(&out).contains("Bogus block of size 0x0020"));
    assert_eq!(fs::read(&output).unwrap().len(), 2 + 16);
}
