//! File header definition
//!
//! The header is the fixed prologue of every system file. Its declared
//! counts bound every loop that follows it.

use super::constants::{CREATION_DATE_LEN, FILE_LABEL_LEN, HEADER_PADDING_LEN, HEADER_SIZE, MAGIC};
use crate::validation::{trim_field, validate_magic_bytes};
use crate::{ByteCursor, FormatError, Result};

/// Fixed-size header of a system file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
    /// Layout code (2 for current writers)
    pub layout_code: i32,
    /// Number of variable records in the dictionary
    pub variable_count: i32,
    /// Compression flag
    pub compression: i32,
    /// 1-based index of the weight variable, 0 when unweighted
    pub weight_index: i32,
    /// Number of cases, -1 when unknown
    pub case_count: i32,
    /// Compression bias
    pub bias: f64,
    /// Creation date/time, space padded
    pub creation_date: [u8; CREATION_DATE_LEN],
    /// File label, space padded
    pub file_label: [u8; FILE_LABEL_LEN],
}

impl FileHeader {
    /// Size of the header in bytes, magic included
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a header with no variables and blank text fields
    pub const fn new() -> Self {
        Self {
            layout_code: 2,
            variable_count: 0,
            compression: 0,
            weight_index: 0,
            case_count: 0,
            bias: 100.0,
            creation_date: [b' '; CREATION_DATE_LEN],
            file_label: [b' '; FILE_LABEL_LEN],
        }
    }

    /// Decode the header from a cursor positioned at offset 0
    ///
    /// The magic is checked before anything else is read; a mismatch stops
    /// the decode with [`FormatError::BadMagic`].
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        if cursor.is_exhausted() {
            return Err(FormatError::EmptyInput);
        }

        let magic = cursor.read_array::<4>()?;
        validate_magic_bytes(&magic, &MAGIC)?;

        let layout_code = cursor.read_i32()?;
        let variable_count = cursor.read_i32()?;
        let compression = cursor.read_i32()?;
        let weight_index = cursor.read_i32()?;
        let case_count = cursor.read_i32()?;
        let bias = cursor.read_f64()?;
        let creation_date = cursor.read_array::<CREATION_DATE_LEN>()?;
        let file_label = cursor.read_array::<FILE_LABEL_LEN>()?;
        cursor.skip(HEADER_PADDING_LEN)?;

        Ok(Self {
            layout_code,
            variable_count,
            compression,
            weight_index,
            case_count,
            bias,
            creation_date,
            file_label,
        })
    }

    /// Parse header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(&mut ByteCursor::new(bytes))
    }

    /// Declared variable count as a loop bound
    pub const fn declared_variables(&self) -> Result<usize> {
        if self.variable_count < 0 {
            return Err(FormatError::InvalidVariableCount(self.variable_count));
        }
        Ok(self.variable_count as usize)
    }

    /// Declared case count, `None` when the writer did not know it
    pub const fn declared_cases(&self) -> Option<usize> {
        if self.case_count < 0 {
            None
        } else {
            Some(self.case_count as usize)
        }
    }

    /// Whether the file declares a compressed case stream
    pub const fn is_compressed(&self) -> bool {
        self.compression != 0
    }

    /// Creation date with padding trimmed
    pub fn creation_date(&self) -> &[u8] {
        trim_field(&self.creation_date)
    }

    /// File label with padding trimmed
    pub fn file_label(&self) -> &[u8] {
        trim_field(&self.file_label)
    }

    /// Set the creation date, truncated or space padded to its field width
    pub fn with_creation_date(mut self, text: &str) -> Self {
        fill_padded(&mut self.creation_date, text.as_bytes());
        self
    }

    /// Set the file label, truncated or space padded to its field width
    pub fn with_file_label(mut self, text: &str) -> Self {
        fill_padded(&mut self.file_label, text.as_bytes());
        self
    }

    /// Convert header to its on-disk bytes
    pub fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4..8].copy_from_slice(&self.layout_code.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.variable_count.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.compression.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.weight_index.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.case_count.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.bias.to_bits().to_le_bytes());

        let date_end = 32 + CREATION_DATE_LEN;
        bytes[32..date_end].copy_from_slice(&self.creation_date);
        bytes[date_end..date_end + FILE_LABEL_LEN].copy_from_slice(&self.file_label);
        // trailing padding stays zero

        bytes
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_padded(field: &mut [u8], text: &[u8]) {
    let len = text.len().min(field.len());
    field.fill(b' ');
    field[..len].copy_from_slice(&text[..len]);
}
