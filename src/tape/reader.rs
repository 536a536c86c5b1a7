//! Reading variable-length record output back.
//!
//! Used to verify a conversion and by the round-trip tests. A stream that
//! ends exactly before a length prefix is a clean end; ending anywhere else
//! is a truncated record.

use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::tape::writer::VarFraming;

pub struct VarRecordReader<R> {
    inner: R,
    framing: VarFraming,
    offset: u64,
    records_read: u64,
}

impl<R: Read> VarRecordReader<R> {
    pub fn new(inner: R, framing: VarFraming) -> Self {
        Self {
            inner,
            framing,
            offset: 0,
            records_read: 0,
        }
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read the next record's payload, or `None` at a clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<Vec<u8>>> {
        let mut prefix = [0u8; 2];
        if !self.read_exact_or_eof(&mut prefix)? {
            return Ok(None);
        }
        let length = u16::from_le_bytes(prefix) as usize;
        let pad = self.framing.padding(length);

        let mut payload = vec![0u8; length + pad];
        self.read_body(&mut payload)?;
        payload.truncate(length);

        self.offset += (2 + length + pad) as u64;
        self.records_read += 1;
        Ok(Some(payload))
    }

    /// Reads the prefix, returning `Ok(false)` on a clean end before its
    /// first byte.
    fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<bool> {
        let n = loop {
            match self.inner.read(&mut buf[..1]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(Error::SourceRead { source }),
            }
        };
        if n == 0 {
            return Ok(false);
        }
        self.read_body(&mut buf[1..])?;
        Ok(true)
    }

    fn read_body(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|source| {
            if source.kind() == io::ErrorKind::UnexpectedEof {
                Error::TruncatedRecord {
                    offset: self.offset,
                    needed: buf.len(),
                    available: 0,
                }
            } else {
                Error::SourceRead { source }
            }
        })
    }
}

impl<R: Read> Iterator for VarRecordReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
