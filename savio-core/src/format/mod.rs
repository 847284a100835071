//! Binary format definitions for `$FL2` system files
//!
//! This module contains the wire layout of the file header, the variable
//! (dictionary) records, and the record-type discriminants that tag the
//! stream following the dictionary.

pub mod constants;
pub mod header;
pub mod record;
#[cfg(feature = "alloc")]
pub mod variable;

pub use header::FileHeader;
pub use record::RecordType;
#[cfg(feature = "alloc")]
pub use variable::{VariableDefinition, VariableKind};
