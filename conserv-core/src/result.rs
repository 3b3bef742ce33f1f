//! Alignment and LCS results, plus their text reports.

use serde::Serialize;
use std::fmt;

use crate::types::GAP;

/// Result of a pairwise or three-way global alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    aligned: Vec<String>,
    score: i32,
}

impl AlignmentResult {
    /// Build from aligned rows of equal length.
    pub(crate) fn new(aligned: Vec<String>, score: i32) -> Self {
        debug_assert!(aligned.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { aligned, score }
    }

    pub fn aligned_sequences(&self) -> &[String] {
        &self.aligned
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn aligned_length(&self) -> usize {
        self.aligned.first().map_or(0, String::len)
    }

    fn column_is_identical(&self, column: usize) -> bool {
        let mut rows = self.aligned.iter().map(|row| row.as_bytes()[column]);
        match rows.next() {
            Some(first) if first != GAP => rows.all(|c| c == first),
            _ => false,
        }
    }

    /// 1-based columns where every row holds the same residue
    pub fn identical_positions(&self) -> Vec<usize> {
        (0..self.aligned_length())
            .filter(|&column| self.column_is_identical(column))
            .map(|column| column + 1)
            .collect()
    }

    pub fn identical_count(&self) -> usize {
        (0..self.aligned_length())
            .filter(|&column| self.column_is_identical(column))
            .count()
    }

    /// Percentage of aligned columns where all rows agree and none is a gap.
    pub fn identity(&self) -> f64 {
        let length = self.aligned_length();
        if length == 0 {
            return 0.0;
        }
        self.identical_count() as f64 / length as f64 * 100.0
    }
}

/// Longest common subsequence of four or more sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcsResult {
    pub length: usize,
    pub sequence: String,
}

impl fmt::Display for LcsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> LCS length = {}", self.length)?;
        writeln!(f, "> LCS: {}", self.sequence)
    }
}

/// Human-readable report of an alignment, labelled with sequence ids.
pub struct AlignmentReport<'a> {
    pub result: &'a AlignmentResult,
    pub ids: Vec<&'a str>,
}

impl<'a> AlignmentReport<'a> {
    pub fn new(result: &'a AlignmentResult, ids: Vec<&'a str>) -> Self {
        Self { result, ids }
    }
}

impl fmt::Display for AlignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.ids.iter().map(|id| id.len()).max().unwrap_or(0);
        for (row, aligned) in self.result.aligned_sequences().iter().enumerate() {
            let label = self.ids.get(row).copied().unwrap_or("?");
            let spaced: Vec<String> = aligned.chars().map(String::from).collect();
            writeln!(f, "> {:<width$}: {}", label, spaced.join(" "), width = width)?;
        }

        let positions = self.result.identical_positions();
        let listed: Vec<String> = positions.iter().map(ToString::to_string).collect();
        writeln!(f)?;
        writeln!(f, "> Alignment length = {}", self.result.aligned_length())?;
        writeln!(f, "> Score = {}", self.result.score())?;
        writeln!(
            f,
            "> Identical positions: {} -> total = {}",
            listed.join(", "),
            positions.len()
        )?;
        writeln!(
            f,
            "> Identity = ({} / {}) x 100 = {:.2}%",
            positions.len(),
            self.result.aligned_length(),
            self.result.identity()
        )
    }
}
