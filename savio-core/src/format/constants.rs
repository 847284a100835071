//! Format constants and magic bytes for `$FL2` system files

/// Magic bytes at offset 0
pub const MAGIC: [u8; 4] = *b"$FL2";

/// Width of the creation date/time text field
pub const CREATION_DATE_LEN: usize = 9;

/// Width of the file label text field
pub const FILE_LABEL_LEN: usize = 64;

/// Padding after the file label
pub const HEADER_PADDING_LEN: usize = 3;

/// Size of the header in bytes, magic included
pub const HEADER_SIZE: usize = 4 + 5 * 4 + 8 + CREATION_DATE_LEN + FILE_LABEL_LEN + HEADER_PADDING_LEN;

/// Width of a variable name field
pub const VARIABLE_NAME_LEN: usize = 8;

/// Size of a variable record without its optional label
pub const VARIABLE_RECORD_SIZE: usize = 6 * 4 + VARIABLE_NAME_LEN;

/// Variable labels are padded to this boundary
pub const LABEL_ALIGNMENT: usize = 4;

/// Record discriminants
pub mod record_tag {
    /// Variable (dictionary) record
    pub const VARIABLE: i32 = 2;
    /// End of the record stream
    pub const TERMINATOR: i32 = 999;
}
