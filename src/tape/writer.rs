//! Variable-length record output.
//!
//! Each record is written as a 2-byte little-endian length followed by its
//! payload. [`VarFraming::WordAligned`] additionally pads odd-length payloads
//! with one zero byte, which is how record-oriented file systems lay out
//! variable-length records on disk.

use std::io::Write;

use crate::error::{Error, Result};

/// How a variable-length record is laid out in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarFraming {
    /// Length prefix and payload, nothing else. Same encoding as the
    /// container itself.
    #[default]
    Counted,
    /// Length prefix and payload, padded to an even number of bytes.
    WordAligned,
}

impl VarFraming {
    /// Pad bytes that follow a payload of `length` bytes.
    pub fn padding(self, length: usize) -> usize {
        match self {
            VarFraming::Counted => 0,
            VarFraming::WordAligned => length & 1,
        }
    }
}

/// Destination of logical records.
pub trait RecordWrite {
    /// Append one logical record. An empty payload writes a terminator.
    fn write_record(&mut self, payload: &[u8]) -> Result<()>;
}

pub struct VarRecordWriter<W: Write> {
    inner: W,
    framing: VarFraming,
    records_written: u64,
    bytes_written: u64,
}

impl<W: Write> VarRecordWriter<W> {
    pub fn new(inner: W, framing: VarFraming) -> Self {
        Self {
            inner,
            framing,
            records_written: 0,
            bytes_written: 0,
        }
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|source| Error::SinkWrite { source })?;
        Ok(self.inner)
    }
}

impl<W: Write> RecordWrite for VarRecordWriter<W> {
    fn write_record(&mut self, payload: &[u8]) -> Result<()> {
        let length = u16::try_from(payload.len()).map_err(|_| Error::OversizedRecord {
            offset: self.bytes_written,
            length: payload.len(),
            max: u16::MAX as usize,
        })?;
        let pad = self.framing.padding(payload.len());

        let sink = |source: std::io::Error| Error::SinkWrite { source };
        self.inner.write_all(&length.to_le_bytes()).map_err(sink)?;
        self.inner.write_all(payload).map_err(sink)?;
        if pad > 0 {
            self.inner.write_all(&[0u8]).map_err(sink)?;
        }

        self.records_written += 1;
        self.bytes_written += (2 + payload.len() + pad) as u64;
        Ok(())
    }
}
