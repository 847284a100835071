#![no_std]

//! savio-core - `$FL2` System File Format Definitions
//!
//! This crate provides the wire layout of `$FL2` statistical system files:
//! the fixed header, variable records, record-type discriminants, and the
//! byte cursor that every decoder reads through. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cursor;
#[cfg(feature = "alloc")]
pub mod dictionary;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use cursor::ByteCursor;
#[cfg(feature = "alloc")]
pub use dictionary::Dictionary;
pub use error::*;
pub use format::*;
pub use traits::ByteSource;
pub use validation::{align_to_boundary, trim_field};
