//! Needleman-Wunsch global alignment of two sequences.
//!
//! Ties between predecessor moves are broken in a fixed order: diagonal,
//! then up (gap in the second sequence), then left (gap in the first). The
//! order is the only source of determinism when several optimal alignments
//! exist, so it must not change.

use crate::budget::ResourceBudget;
use crate::error::{AlignError, AlignResult};
use crate::grid::DpGrid;
use crate::result::AlignmentResult;
use crate::scoring::ScoringConfig;
use crate::types::{check_alignable, SequenceRecord, GAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Diagonal,
    Up,
    Left,
}

/// Global aligner for exactly two sequences
#[derive(Debug, Clone, Default)]
pub struct PairwiseAligner {
    scoring: ScoringConfig,
    budget: ResourceBudget,
}

impl PairwiseAligner {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            budget: ResourceBudget::default(),
        }
    }

    pub fn with_budget(mut self, budget: ResourceBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Align a slice that must hold exactly two records
    pub fn align_records(&self, records: &[SequenceRecord]) -> AlignResult<AlignmentResult> {
        match records {
            [a, b] => self.align(a, b),
            _ => Err(AlignError::invalid_input(format!(
                "pairwise alignment needs exactly 2 sequences, got {}",
                records.len()
            ))),
        }
    }

    pub fn align(&self, a: &SequenceRecord, b: &SequenceRecord) -> AlignResult<AlignmentResult> {
        self.scoring.validate()?;
        check_alignable([a, b])?;
        self.scoring.check_range(&[a.len(), b.len()])?;
        let cells = self.budget.check(&[a.len(), b.len()])?;

        log::debug!(
            "Pairwise alignment {} ({}) vs {} ({}): {} cells",
            a.id(),
            a.len(),
            b.id(),
            b.len(),
            cells
        );

        let (scores, moves) = self.fill(a.symbols(), b.symbols());
        let score = scores.get(&[a.len(), b.len()]);
        let aligned = traceback(&moves, a.symbols(), b.symbols());

        Ok(AlignmentResult::new(aligned, score))
    }

    fn fill(&self, a: &[u8], b: &[u8]) -> (DpGrid<i32>, DpGrid<Move>) {
        let (n, m) = (a.len(), b.len());
        let gap = self.scoring.gap_penalty;

        let mut scores = DpGrid::new(&[n + 1, m + 1], 0i32);
        let mut moves = DpGrid::new(&[n + 1, m + 1], Move::Diagonal);

        for i in 1..=n {
            scores.set(&[i, 0], i as i32 * gap);
            moves.set(&[i, 0], Move::Up);
        }
        for j in 1..=m {
            scores.set(&[0, j], j as i32 * gap);
            moves.set(&[0, j], Move::Left);
        }

        let row = scores.stride(0);
        for i in 1..=n {
            for j in 1..=m {
                let here = i * row + j;
                let diagonal =
                    scores.at(here - row - 1) + self.scoring.substitution_cost(a[i - 1], b[j - 1]);
                let up = scores.at(here - row) + gap;
                let left = scores.at(here - 1) + gap;

                let (best, step) = if diagonal >= up && diagonal >= left {
                    (diagonal, Move::Diagonal)
                } else if up >= left {
                    (up, Move::Up)
                } else {
                    (left, Move::Left)
                };
                scores.set_at(here, best);
                moves.set_at(here, step);
            }
        }

        (scores, moves)
    }
}

fn traceback(moves: &DpGrid<Move>, a: &[u8], b: &[u8]) -> Vec<String> {
    let mut row_a = Vec::with_capacity(a.len() + b.len());
    let mut row_b = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        match moves.get(&[i, j]) {
            Move::Diagonal => {
                row_a.push(a[i - 1]);
                row_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Move::Up => {
                row_a.push(a[i - 1]);
                row_b.push(GAP);
                i -= 1;
            }
            Move::Left => {
                row_a.push(GAP);
                row_b.push(b[j - 1]);
                j -= 1;
            }
        }
    }

    [row_a, row_b]
        .into_iter()
        .map(|row| row.into_iter().rev().map(char::from).collect())
        .collect()
}
