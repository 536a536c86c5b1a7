//! The working buffer between block reads and record extraction.
//!
//! Bytes enter at the tail one physical block at a time and leave from the
//! head when the driver compacts past a record it has written. Capacity is
//! fixed at construction; every append is checked against it.

use crate::config::{PHYSICAL_BLOCK_SIZE, WORKING_BUFFER_CAPACITY};
use crate::error::{Error, Result};

pub struct WorkingBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl WorkingBuffer {
    /// Buffer with the default capacity of [`WORKING_BUFFER_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(WORKING_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Free space left at the tail.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The buffered, not yet consumed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Copy `bytes` to the tail.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.check_room(bytes.len())?;
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Borrow the next physical block's worth of tail space so a block can be
    /// read straight into the buffer. Nothing becomes visible until
    /// [`commit`](Self::commit) is called.
    pub fn reserve_block(&mut self) -> Result<&mut [u8]> {
        let end = self.check_room(PHYSICAL_BLOCK_SIZE)?;
        Ok(&mut self.data[self.len..end])
    }

    /// Make `n` bytes previously written through [`reserve_block`](Self::reserve_block) visible.
    pub fn commit(&mut self, n: usize) {
        assert!(
            n <= PHYSICAL_BLOCK_SIZE && n <= self.remaining(),
            "commit of {n} bytes past the reserved block"
        );
        self.len += n;
    }

    /// Discard the first `n` bytes and shift the rest to the front.
    pub fn compact(&mut self, n: usize) {
        assert!(n <= self.len, "compact({n}) past {} buffered bytes", self.len);
        self.data.copy_within(n..self.len, 0);
        self.len -= n;
    }

    fn check_room(&self, incoming: usize) -> Result<usize> {
        if incoming > self.remaining() {
            return Err(Error::BufferOverflow {
                len: self.len,
                incoming,
                capacity: self.capacity(),
            });
        }
        Ok(self.len + incoming)
    }
}

impl Default for WorkingBuffer {
    fn default() -> Self {
        Self::new()
    }
}
