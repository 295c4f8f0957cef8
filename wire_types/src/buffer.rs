//! Fixed-capacity argument buffer.

use crate::error::CodecError;
use serde::{Deserialize, Serialize};

/// Default capacity for a message's argument buffer, in bytes.
pub const DEFAULT_ARG_CAPACITY: usize = 4096;

/// A fixed-capacity byte buffer holding a message's encoded argument list.
///
/// Writes are all-or-nothing: an append that would exceed the capacity fails
/// with [`CodecError::BufferOverflow`] and leaves the contents unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ArgBuffer {
    /// Creates an empty buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARG_CAPACITY)
    }

    /// Creates an empty buffer with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
        }
    }

    /// The fixed capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of encoded bytes currently held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no encoded arguments.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes still available before the capacity is reached.
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    /// The encoded contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends `data` in full, or fails without writing anything.
    pub fn write(&mut self, data: &[u8]) -> Result<(), CodecError> {
        if data.len() > self.remaining() {
            return Err(CodecError::BufferOverflow {
                needed: data.len(),
                remaining: self.remaining(),
            });
        }
        self.bytes.extend_from_slice(data);
        Ok(())
    }

    /// Discards the contents, keeping the capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl Default for ArgBuffer {
    fn default() -> Self {
        Self::new()
    }
}
