//! Error types for decoding and exporting system files

use std::path::PathBuf;

use savio_core::FormatError;
use thiserror::Error;

/// Errors surfaced by the decoding front end
#[derive(Debug, Error)]
pub enum SavError {
    /// The bytes do not form a valid system file
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The path does not carry the `.sav` extension
    #[error("File must be a .sav file: {}", path.display())]
    InvalidExtension { path: PathBuf },

    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    /// A supplied row does not have one cell per variable
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A supplied cell does not match its variable's kind
    #[error("Row {row}, column {column}: cell type does not match the variable")]
    CellKind { row: usize, column: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SavError {
    /// Whether the error was caused by the input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SavError::Io(_) | SavError::Csv(_))
    }
}

/// Result type for front-end operations
pub type Result<T> = std::result::Result<T, SavError>;
