// Integration tests for src/io/file_io.rs: open_src_file / create_dst_file

use tempfile::TempDir;

use tpcfix::config::PHYSICAL_BLOCK_SIZE;
use tpcfix::io::{create_dst_file, open_src_file};
use tpcfix::Error;

#[test]
fn accepts_whole_block_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.tpc");
    std::fs::write(&path, vec![0u8; 4 * PHYSICAL_BLOCK_SIZE]).unwrap();
    let file = open_src_file(&path).unwrap();
    assert_eq!(file.metadata().unwrap().len(), 4 * PHYSICAL_BLOCK_SIZE as u64);
}

#[test]
fn empty_input_has_valid_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.tpc");
    std::fs::write(&path, b"").unwrap();
    assert!(open_src_file(&path).is_ok());
}

#[test]
fn missing_input_is_open_error() {
    let dir = TempDir::new().unwrap();
    let err = open_src_file(&dir.path().join("absent.tpc")).unwrap_err();
    assert!(matches!(err, Error::SourceOpen { .. }));
    assert!(err.to_string().contains("absent.tpc"));
}

#[test]
fn odd_length_input_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.tpc");
    std::fs::write(&path, vec![0u8; 1000]).unwrap();
    let err = open_src_file(&path).unwrap_err();
    assert!(matches!(err, Error::SourceFormat { .. }));
    assert!(err.to_string().contains("fixed 512b record size"));
}

#[test]
fn output_is_created_fresh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.tpc");
    drop(create_dst_file(&path).unwrap());
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    assert!(matches!(
        create_dst_file(&path),
        Err(Error::SinkCreate { .. })
    ));
}

#[test]
fn output_in_missing_directory_is_create_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("out.tpc");
    assert!(matches!(
        create_dst_file(&path),
        Err(Error::SinkCreate { .. })
    ));
}
