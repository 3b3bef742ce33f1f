//! Sequence file input.

pub mod fasta;

pub use fasta::{FastaError, FastaReader};
