//! Conserv Core Library
//!
//! Global alignment of two and three sequences, longest common subsequence
//! of four or more, plus the sequence catalog and FASTA input they share.

pub mod budget;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod nway;
pub mod pairwise;
pub mod result;
pub mod scoring;
pub mod triple;
pub mod types;

// Re-export commonly used types
pub use budget::{ResourceBudget, DEFAULT_MAX_CELLS};
pub use catalog::SequenceCatalog;
pub use engine::{AlignerKind, Engine, EngineConfig, EngineOutput};
pub use error::{AlignError, AlignResult};
pub use io::{FastaError, FastaReader};
pub use nway::{NWayLcsEngine, Schedule};
pub use pairwise::PairwiseAligner;
pub use result::{AlignmentReport, AlignmentResult, LcsResult};
pub use scoring::ScoringConfig;
pub use triple::TripleAligner;
pub use types::{Alphabet, SequenceRecord, GAP};

/// Version information for the conserv core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
