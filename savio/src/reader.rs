//! Record-by-record reader over a system file
//!
//! The file is read as a sequence of tagged records: one header, the
//! declared number of variable records, then the record stream up to the
//! terminator. New record kinds slot in as new [`Record`] variants.

use log::trace;
use savio_core::{ByteCursor, FileHeader, FormatError, RecordType, VariableDefinition};

use crate::scan::{self, StreamEnd, StreamSummary};

/// One record read from a system file
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Header(FileHeader),
    Variable(VariableDefinition),
    Terminator,
    /// A stream tag the reader does not interpret
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Header,
    Dictionary { remaining: usize },
    Stream,
    Ended(StreamEnd),
    Failed(FormatError),
}

/// Iterator over the records of an in-memory system file
///
/// Yields `Err` at most once; the iterator is finished afterwards.
#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
    cursor: ByteCursor<'a>,
    phase: Phase,
    skipped_tags: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
            phase: Phase::Header,
            skipped_tags: 0,
        }
    }

    /// Decode the header and return a reader positioned at the dictionary
    pub fn open(bytes: &'a [u8]) -> Result<(FileHeader, Self), FormatError> {
        let mut reader = Self::new(bytes);
        let header = reader.read_header()?;
        Ok((header, reader))
    }

    /// Current offset into the buffer
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes not yet read
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Variable records still to be read from the dictionary
    pub fn pending_variables(&self) -> usize {
        match self.phase {
            Phase::Dictionary { remaining } => remaining,
            _ => 0,
        }
    }

    /// Summary of the record stream, available once it has ended
    pub fn summary(&self) -> Option<StreamSummary> {
        match self.phase {
            Phase::Ended(end) => Some(self.summary_at(end)),
            _ => None,
        }
    }

    /// Read every remaining record and return how the stream ended
    pub fn finish(mut self) -> Result<StreamSummary, FormatError> {
        loop {
            match self.phase {
                Phase::Ended(end) => return Ok(self.summary_at(end)),
                Phase::Failed(err) => return Err(err),
                _ => {
                    self.next();
                }
            }
        }
    }

    fn summary_at(&self, end: StreamEnd) -> StreamSummary {
        StreamSummary {
            end,
            skipped_tags: self.skipped_tags,
            offset: self.cursor.position(),
            trailing_bytes: self.cursor.remaining(),
        }
    }

    fn read_header(&mut self) -> Result<FileHeader, FormatError> {
        let header = FileHeader::decode(&mut self.cursor)?;
        self.phase = match header.declared_variables()? {
            0 => Phase::Stream,
            remaining => Phase::Dictionary { remaining },
        };
        Ok(header)
    }

    fn read_next(&mut self) -> Result<Option<Record>, FormatError> {
        match self.phase {
            Phase::Header => self.read_header().map(|header| Some(Record::Header(header))),
            Phase::Dictionary { remaining } => {
                let variable = VariableDefinition::decode(&mut self.cursor)?;
                self.phase = match remaining - 1 {
                    0 => Phase::Stream,
                    remaining => Phase::Dictionary { remaining },
                };
                Ok(Some(Record::Variable(variable)))
            }
            Phase::Stream => match scan::next_tag(&mut self.cursor) {
                Some(RecordType::Terminator) => {
                    self.phase = Phase::Ended(StreamEnd::Terminator);
                    Ok(Some(Record::Terminator))
                }
                Some(other) => {
                    self.skipped_tags += 1;
                    trace!("skipping record tag {} at offset {}", other.to_tag(), self.cursor.position() - 4);
                    Ok(Some(Record::Unknown(other.to_tag())))
                }
                None => {
                    self.phase = Phase::Ended(StreamEnd::Exhausted);
                    Ok(None)
                }
            },
            Phase::Ended(_) | Phase::Failed(_) => Ok(None),
        }
    }
}

impl Iterator for RecordReader<'_> {
    type Item = Result<Record, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_next() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.phase = Phase::Failed(err);
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_bytes(variables: &[VariableDefinition], stream: &[i32]) -> Vec<u8> {
        let header = FileHeader {
            variable_count: variables.len() as i32,
            ..FileHeader::new()
        };
        let mut bytes = header.to_bytes_array().to_vec();
        for variable in variables {
            bytes.extend_from_slice(&variable.to_bytes());
        }
        for tag in stream {
            bytes.extend_from_slice(&tag.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_record_sequence() {
        let vars = [VariableDefinition::numeric("A"), VariableDefinition::string("B", 8)];
        let bytes = file_bytes(&vars, &[3, 4, 999, 5]);
        let mut reader = RecordReader::new(&bytes);

        assert!(matches!(reader.next(), Some(Ok(Record::Header(_)))));
        assert_eq!(reader.pending_variables(), 2);
        assert_eq!(reader.next(), Some(Ok(Record::Variable(vars[0].clone()))));
        assert_eq!(reader.next(), Some(Ok(Record::Variable(vars[1].clone()))));
        assert_eq!(reader.pending_variables(), 0);
        assert_eq!(reader.summary(), None);
        assert_eq!(reader.next(), Some(Ok(Record::Unknown(3))));
        assert_eq!(reader.next(), Some(Ok(Record::Unknown(4))));
        assert_eq!(reader.next(), Some(Ok(Record::Terminator)));
        assert_eq!(reader.next(), None);

        let summary = reader.summary().unwrap();
        assert_eq!(summary.end, StreamEnd::Terminator);
        assert_eq!(summary.skipped_tags, 2);
        // the tag after the terminator is never read
        assert_eq!(summary.trailing_bytes, 4);
        assert_eq!(summary.offset, bytes.len() - 4);
    }

    #[test]
    fn test_variable_tag_in_stream_is_skipped() {
        let bytes = file_bytes(&[], &[2, 999]);
        let records: Vec<_> = RecordReader::new(&bytes).collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], Record::Unknown(2));
        assert_eq!(records[2], Record::Terminator);
    }

    #[test]
    fn test_exhaustion_ends_stream() {
        let mut bytes = file_bytes(&[VariableDefinition::numeric("A")], &[7]);
        bytes.extend_from_slice(&[0x01, 0x02]);
        let mut reader = RecordReader::new(&bytes);
        let records: Vec<_> = reader.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.last(), Some(&Record::Unknown(7)));
        let summary = reader.summary().unwrap();
        assert_eq!(summary.end, StreamEnd::Exhausted);
        assert!(!summary.terminated());
        assert_eq!(summary.skipped_tags, 1);
        assert_eq!(summary.trailing_bytes, 2);
    }

    #[test]
    fn test_error_fuses_reader() {
        let mut bytes = file_bytes(&[VariableDefinition::numeric("A")], &[]);
        let header_len = FileHeader::SIZE;
        bytes[header_len..header_len + 4].copy_from_slice(&7i32.to_le_bytes());
        let mut reader = RecordReader::new(&bytes);

        assert!(matches!(reader.next(), Some(Ok(Record::Header(_)))));
        assert_eq!(
            reader.next(),
            Some(Err(FormatError::UnexpectedRecordType {
                expected: 2,
                actual: 7
            }))
        );
        assert_eq!(reader.position(), header_len + 4);
        assert_eq!(reader.next(), None);
        assert_eq!(reader.summary(), None);
    }

    #[test]
    fn test_negative_variable_count() {
        let header = FileHeader {
            variable_count: -1,
            ..FileHeader::new()
        };
        let bytes = header.to_bytes_array();
        let mut reader = RecordReader::new(&bytes);
        assert_eq!(reader.next(), Some(Err(FormatError::InvalidVariableCount(-1))));
    }

    #[test]
    fn test_open_then_finish() {
        let vars = [VariableDefinition::numeric("A").with_label("First")];
        let bytes = file_bytes(&vars, &[3, 999, 5]);
        let (header, reader) = RecordReader::open(&bytes).unwrap();

        assert_eq!(header.variable_count, 1);
        assert_eq!(reader.position(), FileHeader::SIZE);
        assert_eq!(reader.pending_variables(), 1);

        let summary = reader.finish().unwrap();
        assert!(summary.terminated());
        assert_eq!(summary.skipped_tags, 1);
        assert_eq!(summary.trailing_bytes, 4);
    }

    #[test]
    fn test_finish_reports_dictionary_error() {
        let header = FileHeader {
            variable_count: 2,
            ..FileHeader::new()
        };
        let mut bytes = header.to_bytes_array().to_vec();
        bytes.extend_from_slice(&VariableDefinition::numeric("A").to_bytes());
        let (_, reader) = RecordReader::open(&bytes).unwrap();

        assert_eq!(
            reader.finish(),
            Err(FormatError::TruncatedStream {
                offset: FileHeader::SIZE + 32,
                needed: 4,
                available: 0,
            })
        );
    }

    #[test]
    fn test_open_rejects_bad_magic() {
        let mut bytes = file_bytes(&[], &[999]);
        bytes[..4].copy_from_slice(b"XXXX");
        assert_eq!(
            RecordReader::open(&bytes).map(|(header, _)| header),
            Err(FormatError::BadMagic { found: *b"XXXX" })
        );
    }
}
