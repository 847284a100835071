//! Decoding a complete system file
//!
//! [`decode`] runs one pass over an immutable buffer and returns a
//! [`DecodedFile`]. The case payload is not decoded, so decoded files carry
//! no rows; rows can be attached afterwards with [`DecodedFile::with_rows`],
//! which enforces the row/column invariants.

use log::{debug, trace};
use savio_core::format::constants::VARIABLE_RECORD_SIZE;
use savio_core::{ByteSource, Dictionary, FileHeader, FormatError, VariableKind};
use serde::Serialize;

use crate::config::DecodeConfig;
use crate::reader::{Record, RecordReader};
use crate::scan::StreamSummary;
use crate::{Result, SavError};

/// File-level metadata taken from the header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub layout_code: i32,
    pub variable_count: i32,
    pub compression: i32,
    pub weight_index: i32,
    pub case_count: i32,
    pub bias: f64,
    pub creation_date: String,
    pub file_label: String,
}

impl From<&FileHeader> for FileMetadata {
    fn from(header: &FileHeader) -> Self {
        Self {
            layout_code: header.layout_code,
            variable_count: header.variable_count,
            compression: header.compression,
            weight_index: header.weight_index,
            case_count: header.case_count,
            bias: header.bias,
            creation_date: String::from_utf8_lossy(header.creation_date()).into_owned(),
            file_label: String::from_utf8_lossy(header.file_label()).into_owned(),
        }
    }
}

/// One cell of the case matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Variable kind this cell belongs to
    pub fn kind(&self) -> VariableKind {
        match self {
            Cell::Number(_) => VariableKind::Numeric,
            Cell::Text(_) => VariableKind::String,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// A decoded system file
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    metadata: FileMetadata,
    variables: Dictionary,
    rows: Vec<Vec<Cell>>,
    stream: StreamSummary,
}

impl DecodedFile {
    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Variables in column order
    pub fn variables(&self) -> &Dictionary {
        &self.variables
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Case count declared in the header
    pub fn case_count(&self) -> i32 {
        self.metadata.case_count
    }

    /// Variable count declared in the header; equals `variables().len()`
    pub fn variable_count(&self) -> i32 {
        self.metadata.variable_count
    }

    /// How the record stream after the dictionary ended
    pub fn stream(&self) -> &StreamSummary {
        &self.stream
    }

    /// Attach a case matrix, checking every row against the dictionary
    pub fn with_rows(mut self, rows: Vec<Vec<Cell>>) -> Result<Self> {
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != self.variables.len() {
                return Err(SavError::RowShape {
                    row,
                    expected: self.variables.len(),
                    actual: cells.len(),
                });
            }
            let mismatch = cells
                .iter()
                .zip(&self.variables)
                .position(|(cell, variable)| cell.kind() != variable.kind);
            if let Some(column) = mismatch {
                return Err(SavError::CellKind { row, column });
            }
        }
        self.rows = rows;
        Ok(self)
    }
}

/// Decode a system file held in memory
pub fn decode(bytes: &[u8]) -> std::result::Result<DecodedFile, FormatError> {
    let (header, mut reader) = RecordReader::open(bytes)?;
    debug!(
        "header: layout {} variables {} cases {} compression {}",
        header.layout_code, header.variable_count, header.case_count, header.compression
    );

    // the declared count is not trusted for allocation; the buffer bounds it
    let capacity = reader
        .pending_variables()
        .min(reader.remaining() / VARIABLE_RECORD_SIZE);
    let mut variables = Dictionary::with_capacity(capacity);
    for record in reader.by_ref() {
        let Record::Variable(variable) = record? else {
            // first record past the dictionary
            break;
        };
        trace!(
            "variable {}: {} ({}, width {})",
            variables.len(),
            variable.name,
            variable.kind,
            variable.width
        );
        variables.push(variable);
    }

    let stream = reader.finish()?;
    debug!(
        "record stream ended ({:?}) after {} skipped tags, {} trailing bytes",
        stream.end, stream.skipped_tags, stream.trailing_bytes
    );

    Ok(DecodedFile {
        metadata: FileMetadata::from(&header),
        variables,
        rows: Vec::new(),
        stream,
    })
}

/// Decode from any byte source, applying the configured size limit
pub fn decode_source<S: ByteSource + ?Sized>(source: &S, config: &DecodeConfig) -> Result<DecodedFile> {
    config.check_size(source.size() as u64)?;
    Ok(decode(source.as_slice())?)
}
