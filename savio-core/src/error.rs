//! Error types for system file decoding

/// Errors that can occur while decoding a system file
///
/// Every variant is fatal to the decode call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The input buffer holds no bytes at all
    EmptyInput,
    /// The first four bytes are not `$FL2`
    BadMagic {
        /// The four bytes found at offset 0
        found: [u8; 4],
    },
    /// A dictionary entry carried the wrong record discriminant
    UnexpectedRecordType { expected: i32, actual: i32 },
    /// A read ran past the end of the buffer
    TruncatedStream {
        /// Offset the read started at
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },
    /// The header declared a negative variable count
    InvalidVariableCount(i32),
    /// A variable label declared a negative length
    InvalidLabelLength(i32),
}

impl FormatError {
    /// Short stable identifier for the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            FormatError::EmptyInput => "empty_input",
            FormatError::BadMagic { .. } => "bad_magic",
            FormatError::UnexpectedRecordType { .. } => "unexpected_record_type",
            FormatError::TruncatedStream { .. } => "truncated_stream",
            FormatError::InvalidVariableCount(_) => "invalid_variable_count",
            FormatError::InvalidLabelLength(_) => "invalid_label_length",
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::EmptyInput => write!(f, "Input is empty"),
            FormatError::BadMagic { found } => {
                write!(f, "Invalid magic bytes {found:02x?}, expected \"$FL2\"")
            }
            FormatError::UnexpectedRecordType { expected, actual } => {
                write!(f, "Expected record type {expected}, got {actual}")
            }
            FormatError::TruncatedStream {
                offset,
                needed,
                available,
            } => write!(
                f,
                "Truncated stream at offset {offset}: needed {needed} bytes, {available} available"
            ),
            FormatError::InvalidVariableCount(count) => {
                write!(f, "Invalid variable count {count}")
            }
            FormatError::InvalidLabelLength(len) => write!(f, "Invalid label length {len}"),
        }
    }
}

impl core::error::Error for FormatError {}

/// Result type for format operations
pub type Result<T> = core::result::Result<T, FormatError>;
