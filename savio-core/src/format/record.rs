//! Record-type discriminants
//!
//! Every record after the header starts with a 32-bit tag that says how the
//! bytes following it are to be read.

use super::constants::record_tag;

/// Record kinds known to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    /// Variable (dictionary) record
    Variable,
    /// End of the record stream
    Terminator,
    /// Any other tag, skipped by the scanner
    Unknown(i32),
}

impl RecordType {
    /// Classify a raw tag
    pub const fn from_tag(tag: i32) -> Self {
        match tag {
            record_tag::VARIABLE => RecordType::Variable,
            record_tag::TERMINATOR => RecordType::Terminator,
            other => RecordType::Unknown(other),
        }
    }

    /// Raw tag for this record kind
    pub const fn to_tag(self) -> i32 {
        match self {
            RecordType::Variable => record_tag::VARIABLE,
            RecordType::Terminator => record_tag::TERMINATOR,
            RecordType::Unknown(tag) => tag,
        }
    }

    pub const fn is_terminator(self) -> bool {
        matches!(self, RecordType::Terminator)
    }
}

impl From<i32> for RecordType {
    fn from(tag: i32) -> Self {
        Self::from_tag(tag)
    }
}

impl core::fmt::Display for RecordType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordType::Variable => write!(f, "variable"),
            RecordType::Terminator => write!(f, "terminator"),
            RecordType::Unknown(tag) => write!(f, "unknown({tag})"),
        }
    }
}
