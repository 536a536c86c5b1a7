//! Logical record extraction from a block stream.
//!
//! [`RecordDemuxer::next_record`] tops the working buffer up one physical
//! block at a time until the record at its front is complete, then hands out
//! a view of it. The record stays in the buffer until the caller has written
//! it and calls [`RecordDemuxer::consume`].

use crate::config::{MAX_RECORD_LENGTH, PHYSICAL_BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::tape::block_reader::{BlockRead, BlockReadError};
use crate::tape::buffer::WorkingBuffer;
use crate::tape::record::{declared_length, required_len, LogicalRecord};

pub struct RecordDemuxer<S> {
    source: S,
    /// Container offset of the first byte in the working buffer.
    offset: u64,
}

impl<S: BlockRead> RecordDemuxer<S> {
    pub fn new(source: S) -> Self {
        Self { source, offset: 0 }
    }

    /// Container bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the record at the front of `buffer`, reading blocks until it is
    /// complete.
    ///
    /// # Errors
    ///
    /// - [`Error::OversizedRecord`] if the prefix declares more than
    ///   [`MAX_RECORD_LENGTH`] bytes.
    /// - [`Error::TruncatedRecord`] if the source ends (cleanly or with a
    ///   partial block) while bytes are still required.
    /// - [`Error::SourceRead`] on an I/O failure.
    pub fn next_record<'b>(&mut self, buffer: &'b mut WorkingBuffer) -> Result<LogicalRecord<'b>> {
        loop {
            let bytes = buffer.as_slice();
            if let Some(length) = declared_length(bytes) {
                if length as usize > MAX_RECORD_LENGTH {
                    return Err(Error::OversizedRecord {
                        offset: self.offset,
                        length: length as usize,
                        max: MAX_RECORD_LENGTH,
                    });
                }
            }
            let needed = required_len(bytes);
            if bytes.len() >= needed {
                break;
            }
            self.refill(buffer, needed)?;
        }

        let buffer: &'b WorkingBuffer = buffer;
        let available = buffer.len();
        LogicalRecord::parse(buffer.as_slice()).ok_or(Error::TruncatedRecord {
            offset: self.offset,
            needed: required_len(buffer.as_slice()),
            available,
        })
    }

    /// Drop `n` bytes from the front of `buffer` once the record they held
    /// has been written.
    pub fn consume(&mut self, buffer: &mut WorkingBuffer, n: usize) {
        buffer.compact(n);
        self.offset += n as u64;
    }

    fn refill(&mut self, buffer: &mut WorkingBuffer, needed: usize) -> Result<()> {
        let available = buffer.len();
        let slot = buffer.reserve_block()?;
        match self.source.read_block(slot) {
            Ok(n) => {
                buffer.commit(n);
                log::trace!(
                    "block {} appended, {} of {} bytes buffered",
                    self.source.blocks_read(),
                    buffer.len(),
                    needed
                );
                Ok(())
            }
            Err(BlockReadError::EndOfStream) => Err(Error::TruncatedRecord {
                offset: self.offset,
                needed,
                available,
            }),
            Err(BlockReadError::ShortBlock { got }) => {
                log::debug!(
                    "source ended with a partial block of {} bytes (expected {})",
                    got,
                    PHYSICAL_BLOCK_SIZE
                );
                Err(Error::TruncatedRecord {
                    offset: self.offset,
                    needed,
                    available,
                })
            }
            Err(BlockReadError::Io(source)) => Err(Error::SourceRead { source }),
        }
    }
}
