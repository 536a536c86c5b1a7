//! Logical record view and prefix codec.
//!
//! On the wire a logical record is a 2-byte little-endian unsigned length
//! followed by exactly that many payload bytes. A length of zero is the in-band
//! end-of-file marker.

use crate::config::LENGTH_PREFIX_SIZE;

/// A record borrowed from the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRecord<'a> {
    length: u16,
    payload: &'a [u8],
}

impl<'a> LogicalRecord<'a> {
    /// Parse the record at the front of `bytes`.
    ///
    /// Returns `None` until the prefix and the whole payload are present.
    pub fn parse(bytes: &'a [u8]) -> Option<Self> {
        let length = declared_length(bytes)?;
        let end = LENGTH_PREFIX_SIZE + length as usize;
        let payload = bytes.get(LENGTH_PREFIX_SIZE..end)?;
        Some(Self { length, payload })
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Zero-length records mark the end of a logical file.
    pub fn is_terminator(&self) -> bool {
        self.length == 0
    }

    /// Bytes the record occupies in the container: prefix plus payload.
    pub fn encoded_len(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.length as usize
    }
}

/// Length declared by the prefix at the front of `bytes`, if the prefix is
/// complete.
pub fn declared_length(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

/// Number of bytes that must be buffered before the front record is whole.
/// Until the prefix itself is complete this is just the prefix size.
pub fn required_len(bytes: &[u8]) -> usize {
    match declared_length(bytes) {
        Some(length) => LENGTH_PREFIX_SIZE + length as usize,
        None => LENGTH_PREFIX_SIZE,
    }
}

/// Append the prefixed encoding of `payload` to `out`.
///
/// # Panics
///
/// If `payload` is longer than `u16::MAX` bytes.
pub fn encode_record(out: &mut Vec<u8>, payload: &[u8]) {
    assert!(payload.len() <= u16::MAX as usize, "record payload exceeds u16 length prefix");
    out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    out.extend_from_slice(payload);
}
