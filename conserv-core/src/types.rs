use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AlignError, AlignResult};

/// Symbol emitted in aligned rows where a sequence contributes no residue.
pub const GAP: u8 = b'-';

/// A named biological sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    id: String,
    description: String,
    symbols: Vec<u8>,
}

impl SequenceRecord {
    pub fn new<I, D, S>(id: I, description: D, symbols: S) -> Self
    where
        I: Into<String>,
        D: Into<String>,
        S: Into<Vec<u8>>,
    {
        Self {
            id: id.into(),
            description: description.into(),
            symbols: symbols.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at a 0-based position
    pub fn symbol_at(&self, position: usize) -> Option<u8> {
        self.symbols.get(position).copied()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> Id: {}", self.id)?;
        writeln!(f, "> Description: {}", self.description)?;
        writeln!(f, "> Sequence: {}", String::from_utf8_lossy(&self.symbols))
    }
}

/// Every aligner input must be non-empty and made of printable ASCII
/// residues other than the gap symbol.
pub(crate) fn check_alignable<'a, I>(records: I) -> AlignResult<()>
where
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    for record in records {
        if record.is_empty() {
            return Err(AlignError::invalid_input(format!(
                "sequence '{}' is empty",
                record.id()
            )));
        }
        Alphabet::Any.validate(record)?;
    }
    Ok(())
}

/// Declared alphabet of the input sequences.
///
/// Validation is case-insensitive. `Any` accepts every symbol except the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Dna,
    Rna,
    Protein,
    #[default]
    Any,
}

impl Alphabet {
    pub fn contains(&self, symbol: u8) -> bool {
        let upper = symbol.to_ascii_uppercase();
        match self {
            Alphabet::Dna => b"ACGTN".contains(&upper),
            Alphabet::Rna => b"ACGUN".contains(&upper),
            Alphabet::Protein => b"ACDEFGHIKLMNPQRSTVWYBZX*".contains(&upper),
            Alphabet::Any => symbol != GAP && symbol.is_ascii_graphic(),
        }
    }

    /// Reject the first symbol of `record` that falls outside the alphabet
    pub fn validate(&self, record: &SequenceRecord) -> AlignResult<()> {
        match record.symbols().iter().position(|&c| !self.contains(c)) {
            None => Ok(()),
            Some(pos) => Err(AlignError::invalid_input(format!(
                "sequence '{}' has symbol '{}' at position {} outside the {:?} alphabet",
                record.id(),
                record.symbols()[pos].escape_ascii(),
                pos + 1,
                self
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = SequenceRecord::new("SEQ1", "Human sequence", "ATCG");
        assert_eq!(record.id(), "SEQ1");
        assert_eq!(record.description(), "Human sequence");
        assert_eq!(record.symbols(), b"ATCG");
        assert_eq!(record.len(), 4);
        assert_eq!(record.symbol_at(2), Some(b'C'));
        assert_eq!(record.symbol_at(4), None);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_alphabet_validation() {
        let dna = SequenceRecord::new("a", "", "acgtN");
        assert!(Alphabet::Dna.validate(&dna).is_ok());

        let rna = SequenceRecord::new("b", "", "ACGU");
        assert!(Alphabet::Dna.validate(&rna).is_err());
        assert!(Alphabet::Rna.validate(&rna).is_ok());

        let gapped = SequenceRecord::new("c", "", "AC-G");
        let err = Alphabet::Any.validate(&gapped).unwrap_err();
        assert!(matches!(err, AlignError::InvalidInput(ref m) if m.contains("position 3")));
    }

    #[test]
    fn test_check_alignable_rejects_empty() {
        let ok = SequenceRecord::new("a", "", "ACGT");
        let empty = SequenceRecord::new("b", "", "");
        assert!(check_alignable([&ok]).is_ok());
        let err = check_alignable([&ok, &empty]).unwrap_err();
        assert_eq!(err, AlignError::invalid_input("sequence 'b' is empty"));
    }
}
