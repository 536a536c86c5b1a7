//! Physical block input.
//!
//! A fixed-record source is consumed one 512-byte block at a time. A read
//! that finds no bytes at all is a clean [`BlockReadError::EndOfStream`]; a
//! read that finds some bytes but not a whole block is
//! [`BlockReadError::ShortBlock`]. The caller decides whether either is fatal:
//! the demuxer only asks for a block when it still needs bytes, so for it
//! both mean the container ended mid-record.

use std::io::{self, Read};

use crate::config::PHYSICAL_BLOCK_SIZE;

#[derive(thiserror::Error, Debug)]
pub enum BlockReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("end of data stream")]
    EndOfStream,
    #[error("short block: {got} of {} bytes", PHYSICAL_BLOCK_SIZE)]
    ShortBlock { got: usize },
}

/// Read streams of fixed-size blocks.
pub trait BlockRead {
    /// Fill `block` (exactly [`PHYSICAL_BLOCK_SIZE`] bytes) with the next
    /// physical block and return the number of bytes stored.
    fn read_block(&mut self, block: &mut [u8]) -> Result<usize, BlockReadError>;

    /// Number of whole blocks returned so far.
    fn blocks_read(&self) -> u64;
}

/// [`BlockRead`] over any byte stream whose length is a multiple of the
/// physical block size.
pub struct FixedBlockReader<R> {
    inner: R,
    blocks_read: u64,
}

impl<R: Read> FixedBlockReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            blocks_read: 0,
        }
    }
}

impl<R: Read> BlockRead for FixedBlockReader<R> {
    fn read_block(&mut self, block: &mut [u8]) -> Result<usize, BlockReadError> {
        debug_assert_eq!(block.len(), PHYSICAL_BLOCK_SIZE);
        let mut filled = 0;
        while filled < block.len() {
            match self.inner.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(BlockReadError::Io(e)),
            }
        }

        match filled {
            0 => Err(BlockReadError::EndOfStream),
            n if n < block.len() => Err(BlockReadError::ShortBlock { got: n }),
            n => {
                self.blocks_read += 1;
                Ok(n)
            }
        }
    }

    fn blocks_read(&self) -> u64 {
        self.blocks_read
    }
}
