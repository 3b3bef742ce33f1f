//! Linear gap scoring model used by the pairwise and three-way aligners.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, AlignResult};
use crate::types::GAP;

pub const DEFAULT_MATCH: i32 = 1;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -2;

/// Match / mismatch / gap scores for one alignment call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_match")]
    pub match_score: i32,
    #[serde(default = "default_mismatch")]
    pub mismatch_penalty: i32,
    #[serde(default = "default_gap")]
    pub gap_penalty: i32,
}

fn default_match() -> i32 { DEFAULT_MATCH }
fn default_mismatch() -> i32 { DEFAULT_MISMATCH }
fn default_gap() -> i32 { DEFAULT_GAP }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch_penalty: DEFAULT_MISMATCH,
            gap_penalty: DEFAULT_GAP,
        }
    }
}

impl ScoringConfig {
    pub fn new(match_score: i32, mismatch_penalty: i32, gap_penalty: i32) -> AlignResult<Self> {
        let scoring = Self { match_score, mismatch_penalty, gap_penalty };
        scoring.validate()?;
        Ok(scoring)
    }

    /// Gap penalties must be negative and a match must outscore a mismatch.
    pub fn validate(&self) -> AlignResult<()> {
        if self.gap_penalty >= 0 {
            return Err(AlignError::configuration(format!(
                "gap penalty must be negative, got {}",
                self.gap_penalty
            )));
        }
        if self.match_score <= self.mismatch_penalty {
            return Err(AlignError::configuration(format!(
                "match score ({}) must be greater than mismatch penalty ({})",
                self.match_score, self.mismatch_penalty
            )));
        }
        Ok(())
    }

    /// Reject scores whose extreme path totals would not fit in `i32`.
    ///
    /// Every path through the DP emits at most `sum(lengths)` columns, and a
    /// column costs at most one unit per pair of rows, so this bounds every
    /// cell and every candidate the fill computes.
    pub fn check_range(&self, lengths: &[usize]) -> AlignResult<()> {
        let unit = [self.match_score, self.mismatch_penalty, self.gap_penalty]
            .iter()
            .map(|score| u64::from(score.unsigned_abs()))
            .max()
            .unwrap_or(0);
        let rows = lengths.len() as u64;
        let pairs = rows * rows.saturating_sub(1) / 2;
        let columns = lengths
            .iter()
            .try_fold(0u64, |acc, &len| acc.checked_add(len as u64));

        let extreme = columns
            .and_then(|columns| columns.checked_mul(pairs))
            .and_then(|steps| steps.checked_mul(unit));
        match extreme {
            Some(total) if total <= i32::MAX as u64 => Ok(()),
            _ => Err(AlignError::configuration(format!(
                "scores (match {}, mismatch {}, gap {}) overflow a 32-bit score over sequences of lengths {:?}",
                self.match_score, self.mismatch_penalty, self.gap_penalty, lengths
            ))),
        }
    }

    #[inline]
    pub fn substitution_cost(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_penalty
        }
    }

    /// Sum-of-pairs cost of one aligned column.
    ///
    /// Every unordered pair of rows contributes `substitution_cost` when both
    /// hold a residue, `gap_penalty` when exactly one is a gap and nothing when
    /// both are gaps. For two rows this is the pairwise column cost.
    pub fn column_cost(&self, column: &[u8]) -> i32 {
        let mut cost = 0;
        for (i, &a) in column.iter().enumerate() {
            for &b in &column[i + 1..] {
                cost += match (a == GAP, b == GAP) {
                    (false, false) => self.substitution_cost(a, b),
                    (true, true) => 0,
                    _ => self.gap_penalty,
                };
            }
        }
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.match_score, 1);
        assert_eq!(scoring.mismatch_penalty, -1);
        assert_eq!(scoring.gap_penalty, -2);
        assert!(scoring.validate().is_ok());
    }

    #[test]
    fn test_substitution_cost() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.substitution_cost(b'A', b'A'), 1);
        assert_eq!(scoring.substitution_cost(b'A', b'G'), -1);
    }

    #[test]
    fn test_column_cost() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.column_cost(b"AA"), 1);
        assert_eq!(scoring.column_cost(b"A-"), -2);
        assert_eq!(scoring.column_cost(b"AAA"), 3);
        assert_eq!(scoring.column_cost(b"AAC"), 1 - 1 - 1);
        assert_eq!(scoring.column_cost(b"AC-"), -1 - 2 - 2);
        assert_eq!(scoring.column_cost(b"A--"), -4);
    }

    #[test]
    fn test_rejects_invalid_policy() {
        assert!(matches!(
            ScoringConfig::new(1, -1, 0),
            Err(AlignError::Configuration(_))
        ));
        assert!(matches!(
            ScoringConfig::new(-1, -1, -2),
            Err(AlignError::Configuration(_))
        ));
        assert!(ScoringConfig::new(2, -1, -1).is_ok());
    }

    #[test]
    fn test_check_range() {
        let scoring = ScoringConfig::default();
        assert!(scoring.check_range(&[1000, 1000]).is_ok());
        assert!(scoring.check_range(&[1000, 1000, 1000]).is_ok());

        let harsh = ScoringConfig::new(1, -1, -1_000_000).unwrap();
        assert!(harsh.check_range(&[100, 100]).is_ok());
        assert!(matches!(
            harsh.check_range(&[3000, 3]),
            Err(AlignError::Configuration(_))
        ));
        // Three rows give three pairs per column.
        assert!(matches!(
            harsh.check_range(&[1200, 1, 1]),
            Err(AlignError::Configuration(_))
        ));

        let extreme = ScoringConfig::new(i32::MAX, i32::MIN, i32::MIN).unwrap();
        assert!(extreme.check_range(&[1, 1]).is_err());
    }
}
