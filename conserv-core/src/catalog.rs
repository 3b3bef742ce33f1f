//! Caller-owned collection of loaded sequences.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{AlignError, AlignResult};
use crate::io::fasta::FastaReader;
use crate::types::SequenceRecord;

/// Sequences keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SequenceCatalog {
    records: Vec<SequenceRecord>,
    index: HashMap<String, usize>,
}

impl SequenceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. An existing record with the same id is replaced in place
    /// and returned.
    pub fn insert(&mut self, record: SequenceRecord) -> Option<SequenceRecord> {
        match self.index.get(record.id()) {
            Some(&slot) => {
                log::warn!("Replacing sequence '{}' already in the catalog", record.id());
                Some(std::mem::replace(&mut self.records[slot], record))
            }
            None => {
                self.index.insert(record.id().to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Clone the records with the given ids, in the order requested
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> AlignResult<Vec<SequenceRecord>> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .cloned()
                    .ok_or_else(|| AlignError::invalid_input(format!("no sequence with id '{}'", id)))
            })
            .collect()
    }

    /// Load every record of a FASTA file; returns how many were read.
    pub fn load_fasta<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let records = FastaReader::read_file(&path)?;
        let count = records.len();
        for record in records {
            self.insert(record);
        }
        log::info!("Loaded {} sequences from {}", count, path.as_ref().display());
        Ok(count)
    }
}

impl Extend<SequenceRecord> for SequenceCatalog {
    fn extend<I: IntoIterator<Item = SequenceRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
