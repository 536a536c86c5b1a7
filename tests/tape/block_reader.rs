// Integration tests for src/tape/block_reader.rs: FixedBlockReader
//
// Exercises the public BlockRead contract: whole blocks, clean end of
// stream, short trailing blocks and I/O failures.

use std::io::{self, Cursor, Read};

use tpcfix::config::PHYSICAL_BLOCK_SIZE;
use tpcfix::tape::{BlockRead, BlockReadError, FixedBlockReader};

struct BrokenRead;

impl Read for BrokenRead {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "no access"))
    }
}

#[test]
fn counts_blocks_and_stops_cleanly() {
    let mut reader = FixedBlockReader::new(Cursor::new(vec![3u8; 3 * PHYSICAL_BLOCK_SIZE]));
    let mut block = vec![0u8; PHYSICAL_BLOCK_SIZE];
    for _ in 0..3 {
        assert_eq!(reader.read_block(&mut block).unwrap(), PHYSICAL_BLOCK_SIZE);
    }
    assert!(matches!(
        reader.read_block(&mut block),
        Err(BlockReadError::EndOfStream)
    ));
    assert_eq!(reader.blocks_read(), 3);
}

#[test]
fn trailing_fragment_is_short_block() {
    let mut data = vec![0u8; PHYSICAL_BLOCK_SIZE];
    data.extend_from_slice(&[1, 2, 3]);
    let mut reader = FixedBlockReader::new(Cursor::new(data));
    let mut block = vec![0u8; PHYSICAL_BLOCK_SIZE];
    reader.read_block(&mut block).unwrap();
    match reader.read_block(&mut block) {
        Err(BlockReadError::ShortBlock { got }) => assert_eq!(got, 3),
        other => panic!("expected ShortBlock, got {other:?}"),
    }
}

#[test]
fn io_errors_pass_through() {
    let mut reader = FixedBlockReader::new(BrokenRead);
    let mut block = vec![0u8; PHYSICAL_BLOCK_SIZE];
    match reader.read_block(&mut block) {
        Err(BlockReadError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("expected Io, got {other:?}"),
    }
}
