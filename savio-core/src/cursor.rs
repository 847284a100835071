//! Bounds-checked byte cursor over an immutable buffer
//!
//! All multi-byte numbers in a system file are stored byte-reversed with
//! respect to network order, which is little-endian on disk. The reads here
//! are the only place that reversal happens.

use crate::{FormatError, Result};

/// Forward-only reader over a byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at offset 0
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(FormatError::TruncatedStream {
                offset: self.pos,
                needed: len,
                available,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Take the next `N` bytes as a fixed array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Advance past `len` bytes without inspecting them
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Read a byte-reversed 32-bit signed integer
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Read a byte-reversed 64-bit word and reinterpret it as an IEEE-754 double
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_array::<8>()
            .map(|raw| f64::from_bits(u64::from_le_bytes(raw)))
    }
}
