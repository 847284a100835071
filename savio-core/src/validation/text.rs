//! Normalization of fixed-width text fields
//!
//! Text fields are space or NUL padded to their declared width. Trimming
//! drops every byte at or below ASCII space from both ends, so NUL, tab,
//! newline and other control bytes go along with the padding.

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Whether a byte is stripped by [`trim_field`]
const fn is_trimmable(byte: u8) -> bool {
    byte <= b' '
}

/// Trim padding and control bytes from both ends of a field
pub fn trim_field(bytes: &[u8]) -> &[u8] {
    let start = match bytes.iter().position(|&b| !is_trimmable(b)) {
        Some(start) => start,
        None => return &[],
    };
    let end = bytes
        .iter()
        .rposition(|&b| !is_trimmable(b))
        .map_or(start, |end| end + 1);
    &bytes[start..end]
}

/// Decode a trimmed text field, replacing invalid UTF-8 sequences
#[cfg(feature = "alloc")]
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(trim_field(bytes)).into_owned()
}

/// Decode a variable name: trimmed, with interior NUL bytes removed
#[cfg(feature = "alloc")]
pub fn decode_name(bytes: &[u8]) -> String {
    let mut name = decode_text(bytes);
    name.retain(|c| c != '\0');
    name
}
