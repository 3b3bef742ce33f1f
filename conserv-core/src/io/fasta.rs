//! FASTA/FASTQ sequence reader
//!
//! Records are read with needletail; `.gz` files are decompressed with
//! flate2 first. Headers split at the first whitespace into id and
//! description, and symbols are upper-cased.

use anyhow::Result;
use flate2::read::GzDecoder;
use needletail::{parse_fastx_file, parse_fastx_reader};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::types::SequenceRecord;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Record with an empty id")]
    MissingId,
    #[error("Empty file or no sequences found")]
    EmptyFile,
}

pub struct FastaReader;

impl FastaReader {
    /// Read every record of a FASTA/FASTQ file, gzipped or not
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>> {
        let path = path.as_ref();
        log::debug!("Reading sequences from {}", path.display());

        if path.to_string_lossy().ends_with(".gz") {
            let file = File::open(path)?;
            return Self::read(BufReader::new(GzDecoder::new(file)));
        }

        let mut reader = parse_fastx_file(path).map_err(|e| FastaError::Parse(e.to_string()))?;
        let mut records = Vec::new();
        while let Some(record) = reader.next() {
            let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
            records.push(Self::convert(&record.id(), &record.seq())?);
        }
        Self::non_empty(records)
    }

    /// Read every record from any readable source
    pub fn read<R: Read + Send>(reader: R) -> Result<Vec<SequenceRecord>> {
        let mut reader = parse_fastx_reader(reader).map_err(|e| FastaError::Parse(e.to_string()))?;
        let mut records = Vec::new();
        while let Some(record) = reader.next() {
            let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
            records.push(Self::convert(&record.id(), &record.seq())?);
        }
        Self::non_empty(records)
    }

    fn convert(header: &[u8], seq: &[u8]) -> Result<SequenceRecord, FastaError> {
        let header = String::from_utf8_lossy(header);
        let header = header.trim();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, rest.trim()),
            None => (header, ""),
        };
        if id.is_empty() {
            return Err(FastaError::MissingId);
        }
        Ok(SequenceRecord::new(id, description, seq.to_ascii_uppercase()))
    }

    fn non_empty(records: Vec<SequenceRecord>) -> Result<Vec<SequenceRecord>> {
        if records.is_empty() {
            Err(FastaError::EmptyFile.into())
        } else {
            Ok(records)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};
    use tempfile::Builder;

    const SAMPLE: &str = ">SEQ1 Human sequence\n\
                          ATCGATCG\n\
                          ATCG\n\
                          >SEQ2\n\
                          atcgatcgatgg\n";

    #[test]
    fn test_read_headers_and_symbols() {
        let records = FastaReader::read(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "SEQ1");
        assert_eq!(records[0].description(), "Human sequence");
        assert_eq!(records[0].symbols(), b"ATCGATCGATCG");
        assert_eq!(records[1].id(), "SEQ2");
        assert_eq!(records[1].description(), "");
        assert_eq!(records[1].symbols(), b"ATCGATCGATGG");
    }

    #[test]
    fn test_read_file() {
        let mut file = Builder::new().suffix(".fa").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let records = FastaReader::read_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].len(), 12);
    }

    #[test]
    fn test_read_gzipped_file() {
        let file = Builder::new().suffix(".fa.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let records = FastaReader::read_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description(), "Human sequence");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(FastaReader::read(Cursor::new("")).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FastaReader::read_file("/nonexistent/sequences.fa").is_err());
    }
}
