//! savio - Decoder for `$FL2` statistical system files
//!
//! This library reads system files into file metadata, an ordered variable
//! dictionary and a case matrix, and projects the result to JSON or CSV.
//!
//! ## Architecture
//!
//! - **savio-core**: Wire layout, byte cursor and record definitions (no I/O)
//! - **savio**: Record reader, stream scanning, file loading and export
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use savio::{decode_path, serialize, DecodeConfig};
//!
//! fn example() -> savio::Result<()> {
//!     let file = decode_path("survey.sav", &DecodeConfig::default())?;
//!     for variable in file.variables() {
//!         println!("{} ({})", variable.name, variable.kind);
//!     }
//!     println!("{}", serialize(&file));
//!     Ok(())
//! }
//! ```
//!
//! Decoding never fabricates case values: the case payload after the
//! dictionary is scanned for record tags but not decoded, so
//! [`DecodedFile::rows`] is empty for decoded files.

// Re-export core format definitions
pub use savio_core::{
    ByteSource, Dictionary, FileHeader, FormatError, RecordType, VariableDefinition,
    VariableKind,
};

pub mod config;
pub mod decode;
pub mod error;
pub mod file;
pub mod reader;
pub mod scan;
pub mod serialize;

pub use config::DecodeConfig;
pub use decode::{decode, decode_source, Cell, DecodedFile, FileMetadata};
pub use error::{Result, SavError};
pub use file::{decode_path, SavFile};
pub use reader::{Record, RecordReader};
pub use scan::{StreamEnd, StreamSummary};
pub use serialize::{serialize, to_document, write_csv};
