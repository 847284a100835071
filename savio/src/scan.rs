//! Record-stream scanning after the dictionary
//!
//! The stream that follows the dictionary is a run of 32-bit record tags.
//! Scanning stops at the terminator tag or when fewer than four bytes are
//! left; both are normal ends. Case payload is not decoded.

use savio_core::{ByteCursor, RecordType};

/// How the record stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// A terminator tag was read
    Terminator,
    /// The buffer ran out before a terminator; treated as one
    Exhausted,
}

/// Outcome of scanning the record stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    pub end: StreamEnd,
    /// Tags read and skipped before the stream ended
    pub skipped_tags: usize,
    /// Offset just past the last tag read
    pub offset: usize,
    /// Bytes left unread when the scan stopped
    pub trailing_bytes: usize,
}

impl StreamSummary {
    pub fn terminated(&self) -> bool {
        self.end == StreamEnd::Terminator
    }
}

/// Read the next record tag, or `None` once fewer than four bytes remain
///
/// A partial tag at the end of the buffer is left unread.
pub fn next_tag(cursor: &mut ByteCursor<'_>) -> Option<RecordType> {
    cursor.read_i32().ok().map(RecordType::from_tag)
}
