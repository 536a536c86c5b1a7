// e2e/container_roundtrip.rs: conversions through the binary
//
// Converted output must read back to exactly the input's logical records, and
// repeated conversions must be byte-identical.

#[path = "common.rs"]
mod common;

use std::fs;
use std::io::Cursor;

use common::{run, stderr, write_container};
use tempfile::TempDir;
use tpcfix::config::MAX_RECORD_LENGTH;
use tpcfix::tape::{ContainerBuilder, VarFraming, VarRecordReader};

fn records_of(bytes: Vec<u8>) -> Vec<Vec<u8>> {
    VarRecordReader::new(Cursor::new(bytes), VarFraming::Counted)
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_roundtrip_many_files() {
    let builder = ContainerBuilder::new()
        .pattern_file(512, 64)
        .pattern_file(MAX_RECORD_LENGTH, 4)
        .pattern_file(1, 1)
        .pattern_file(10_240, 16)
        .end();
    let expected = builder.records().to_vec();

    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", builder);
    let output = dir.path().join("out.tpc");

    let out = run(["-q".as_ref(), input.as_os_str(), output.as_os_str()]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(records_of(fs::read(&output).unwrap()), expected);
}

#[test]
fn test_empty_container() {
    let dir = TempDir::new().unwrap();
    let input = write_container(dir.path(), "in.tpc", ContainerBuilder::new().end().end());
    let output = dir.path().join("out.tpc");

    let out = run([&input, &output]);
    assert!(out.status.success());
    assert_eq!(fs::read(&output).unwrap(), [0, 0]);
    assert_eq!(String::from_utf8_lossy(&out.stdout), "EOF\n");
}

#[test]
fn test_idempotent_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write_container(
        dir.path(),
        "in.tpc",
        ContainerBuilder::new().pattern_file(777, 30).pattern_file(3, 3).end(),
    );
    let first = dir.path().join("first.tpc");
    let second = dir.path().join("second.tpc");

    assert!(run(["-q".as_ref(), input.as_os_str(), first.as_os_str()]).status.success());
    assert!(run(["-q".as_ref(), input.as_os_str(), second.as_os_str()]).status.success());
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
