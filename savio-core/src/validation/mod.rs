//! Validation and field-normalization utilities for system files
//!
//! Pure functions over byte layouts. No I/O dependencies.

pub mod format;
pub mod text;

pub use format::{align_to_boundary, calculate_padding, validate_magic_bytes};
pub use text::trim_field;
#[cfg(feature = "alloc")]
pub use text::{decode_name, decode_text};
