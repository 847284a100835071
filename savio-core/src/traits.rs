//! Core traits for system file decoding

/// Trait for backends that hold a complete system file in memory
///
/// Decoding reads from a bounded slice, so any owner of the bytes (a
/// vector, a memory map, a static fixture) can feed the decoder.
pub trait ByteSource {
    /// Get a slice of the underlying data
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl ByteSource for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn as_slice(&self) -> &[u8] {
        (**self).as_slice()
    }
}

#[cfg(feature = "alloc")]
impl ByteSource for alloc::vec::Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
