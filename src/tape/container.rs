//! Building fixed-block containers.
//!
//! This is the opposite direction of the conversion: logical records are
//! encoded back to back and the result is zero-padded to a whole number of
//! physical blocks, which is exactly what a byte-stream copy of a variable
//! record TPC file looks like.

use crate::config::PHYSICAL_BLOCK_SIZE;
use crate::tape::record::encode_record;

#[derive(Debug, Default, Clone)]
pub struct ContainerBuilder {
    bytes: Vec<u8>,
    records: Vec<Vec<u8>>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn record(mut self, payload: &[u8]) -> Self {
        encode_record(&mut self.bytes, payload);
        self.records.push(payload.to_vec());
        self
    }

    /// Append a zero-length record.
    pub fn terminator(self) -> Self {
        self.record(&[])
    }

    /// Append a logical file: every record in `records`, then a terminator.
    pub fn file<I, P>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        for payload in records {
            self = self.record(payload.as_ref());
        }
        self.terminator()
    }

    /// Append a logical file of `count` records of `block_size` bytes filled
    /// with a deterministic pattern.
    pub fn pattern_file(self, block_size: usize, count: usize) -> Self {
        let seed = self.records.len();
        let records = (0..count).map(|i| pattern_payload(seed + i, block_size));
        self.file(records)
    }

    /// Close the container with the second terminator of the double EOF.
    pub fn end(self) -> Self {
        self.terminator()
    }

    /// Append bytes that are not a well-formed record.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Every record appended through the record-level methods, in order.
    pub fn records(&self) -> &[Vec<u8>] {
        &self.records
    }

    /// The encoded records without block padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The container zero-padded to a multiple of [`PHYSICAL_BLOCK_SIZE`].
    pub fn into_blocks(self) -> Vec<u8> {
        let mut bytes = self.bytes;
        let rem = bytes.len() % PHYSICAL_BLOCK_SIZE;
        if rem != 0 {
            bytes.resize(bytes.len() + PHYSICAL_BLOCK_SIZE - rem, 0);
        }
        bytes
    }
}

/// Deterministic payload for record number `index`.
pub fn pattern_payload(index: usize, len: usize) -> Vec<u8> {
    (0..len).map(|j| (index * 31 + j * 7) as u8).collect()
}
