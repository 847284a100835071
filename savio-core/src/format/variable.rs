//! Variable (dictionary) record definitions
//!
//! A variable record describes one column of the case matrix. Its position
//! in the dictionary is its column index.

use alloc::string::String;
use alloc::vec::Vec;

use super::constants::{record_tag, LABEL_ALIGNMENT, VARIABLE_NAME_LEN, VARIABLE_RECORD_SIZE};
use crate::validation::{align_to_boundary, calculate_padding, decode_name, decode_text};
use crate::{ByteCursor, FormatError, Result};

/// Storage class of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VariableKind {
    Numeric,
    String,
}

impl VariableKind {
    /// Classify a raw type code: positive codes are string widths
    pub const fn from_type_code(code: i32) -> Self {
        if code > 0 {
            VariableKind::String
        } else {
            VariableKind::Numeric
        }
    }
}

impl core::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            VariableKind::Numeric => write!(f, "numeric"),
            VariableKind::String => write!(f, "string"),
        }
    }
}

/// One decoded variable record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VariableDefinition {
    /// Name with padding and NUL bytes removed
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: VariableKind,
    /// Raw type code: 0 for numeric, the declared width for strings
    pub width: i32,
    pub has_label: bool,
    pub missing_format: i32,
    pub print_format: i32,
    pub write_format: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
}

impl VariableDefinition {
    /// Create an unlabelled numeric variable
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Numeric,
            width: 0,
            has_label: false,
            missing_format: 0,
            print_format: 0,
            write_format: 0,
            label: None,
        }
    }

    /// Create an unlabelled string variable of the given width
    pub fn string(name: impl Into<String>, width: i32) -> Self {
        Self {
            kind: VariableKind::from_type_code(width),
            width,
            ..Self::numeric(name)
        }
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.has_label = true;
        self.label = Some(label.into());
        self
    }

    /// Set the opaque missing-value, print and write format codes
    pub fn with_formats(mut self, missing: i32, print: i32, write: i32) -> Self {
        self.missing_format = missing;
        self.print_format = print;
        self.write_format = write;
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == VariableKind::Numeric
    }

    /// Decode one variable record, discriminant included
    ///
    /// A discriminant other than the variable tag fails before any further
    /// byte is read.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let record_type = cursor.read_i32()?;
        if record_type != record_tag::VARIABLE {
            return Err(FormatError::UnexpectedRecordType {
                expected: record_tag::VARIABLE,
                actual: record_type,
            });
        }

        let type_code = cursor.read_i32()?;
        // only an exact 1 marks a label; other values are tolerated as "no label"
        let has_label = cursor.read_i32()? == 1;
        let missing_format = cursor.read_i32()?;
        let print_format = cursor.read_i32()?;
        let write_format = cursor.read_i32()?;
        let name = decode_name(cursor.read_bytes(VARIABLE_NAME_LEN)?);

        let label = if has_label {
            Some(decode_label(cursor)?)
        } else {
            None
        };

        Ok(Self {
            name,
            kind: VariableKind::from_type_code(type_code),
            width: type_code,
            has_label,
            missing_format,
            print_format,
            write_format,
            label,
        })
    }

    /// Size of this record on disk
    pub fn encoded_len(&self) -> usize {
        match self.label_bytes() {
            Some(label) => VARIABLE_RECORD_SIZE + 4 + align_to_boundary(label.len(), LABEL_ALIGNMENT),
            None => VARIABLE_RECORD_SIZE,
        }
    }

    /// Convert the record to its on-disk bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());

        bytes.extend_from_slice(&record_tag::VARIABLE.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&i32::from(self.has_label).to_le_bytes());
        bytes.extend_from_slice(&self.missing_format.to_le_bytes());
        bytes.extend_from_slice(&self.print_format.to_le_bytes());
        bytes.extend_from_slice(&self.write_format.to_le_bytes());

        let mut name = [b' '; VARIABLE_NAME_LEN];
        let name_len = self.name.len().min(VARIABLE_NAME_LEN);
        name[..name_len].copy_from_slice(&self.name.as_bytes()[..name_len]);
        bytes.extend_from_slice(&name);

        if let Some(label) = self.label_bytes() {
            let padding = calculate_padding(label.len(), LABEL_ALIGNMENT);
            bytes.extend_from_slice(&(label.len() as i32).to_le_bytes());
            bytes.extend_from_slice(label);
            bytes.resize(bytes.len() + padding, b' ');
        }

        bytes
    }

    fn label_bytes(&self) -> Option<&[u8]> {
        if self.has_label {
            Some(self.label.as_deref().unwrap_or("").as_bytes())
        } else {
            None
        }
    }
}

/// Read a length-prefixed label padded to [`LABEL_ALIGNMENT`]
fn decode_label(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let declared = cursor.read_i32()?;
    if declared < 0 {
        return Err(FormatError::InvalidLabelLength(declared));
    }
    let len = declared as usize;
    let block = cursor.read_bytes(align_to_boundary(len, LABEL_ALIGNMENT))?;
    Ok(decode_text(&block[..len]))
}
