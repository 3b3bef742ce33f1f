//! Three-way global alignment with sum-of-pairs scoring.
//!
//! Each DP move advances a non-empty subset of the three sequences and emits
//! one aligned column. The move is priced by `ScoringConfig::column_cost` of
//! that column: every pair of advanced sequences adds its substitution cost,
//! every pair with one advanced and one held back adds one gap penalty, and
//! a pair where neither advances adds nothing.
//!
//! Boundary cells are filled by the same recurrence restricted to moves that
//! stay inside the tensor, so a single-sequence step costs two gap penalties
//! (one against each held-back partner), and the axis lines hold
//! `i * 2 * gap_penalty` rather than `i * gap_penalty`. On the face where the third
//! sequence never advances, every cell equals the pairwise score of the
//! first two prefixes plus `(i + j) * gap_penalty`: a path-independent shift,
//! so the optimal paths are exactly the pairwise ones.

use crate::budget::ResourceBudget;
use crate::error::{AlignError, AlignResult};
use crate::grid::DpGrid;
use crate::result::AlignmentResult;
use crate::scoring::ScoringConfig;
use crate::types::{check_alignable, SequenceRecord, GAP};

const ADVANCE_A: u8 = 0b001;
const ADVANCE_B: u8 = 0b010;
const ADVANCE_C: u8 = 0b100;

/// Moves in tie-break priority: the three-way diagonal, then the two-advance
/// moves (AB, AC, BC), then the single-advance moves (A, B, C).
const MOVES: [u8; 7] = [
    ADVANCE_A | ADVANCE_B | ADVANCE_C,
    ADVANCE_A | ADVANCE_B,
    ADVANCE_A | ADVANCE_C,
    ADVANCE_B | ADVANCE_C,
    ADVANCE_A,
    ADVANCE_B,
    ADVANCE_C,
];

/// Global aligner for exactly three sequences
#[derive(Debug, Clone, Default)]
pub struct TripleAligner {
    scoring: ScoringConfig,
    budget: ResourceBudget,
}

impl TripleAligner {
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

    /// Align a slice that must hold exactly three records
    pub fn align_records(&self, records: &[SequenceRecord]) -> AlignResult<AlignmentResult> {
        match records {
            [a, b, c] => self.align(a, b, c),
            _ => Err(AlignError::invalid_input(format!(
                "three-way alignment needs exactly 3 sequences, got {}",
                records.len()
            ))),
        }
    }

    pub fn align(
        &self,
        a: &SequenceRecord,
        b: &SequenceRecord,
        c: &SequenceRecord,
    ) -> AlignResult<AlignmentResult> {
        self.scoring.validate()?;
        check_alignable([a, b, c])?;
        self.scoring.check_range(&[a.len(), b.len(), c.len()])?;
        let cells = self.budget.check(&[a.len(), b.len(), c.len()])?;

        log::debug!(
            "Three-way alignment {} ({}) / {} ({}) / {} ({}): {} cells",
            a.id(),
            a.len(),
            b.id(),
            b.len(),
            c.id(),
            c.len(),
            cells
        );

        let seqs = [a.symbols(), b.symbols(), c.symbols()];
        let (scores, moves) = self.fill(&seqs);
        let score = scores.get(&[a.len(), b.len(), c.len()]);
        let aligned = traceback(&moves, &seqs);

        Ok(AlignmentResult::new(aligned, score))
    }

    fn fill(&self, seqs: &[&[u8]; 3]) -> (DpGrid<i32>, DpGrid<u8>) {
        let shape = [seqs[0].len() + 1, seqs[1].len() + 1, seqs[2].len() + 1];
        let mut scores = DpGrid::new(&shape, 0i32);
        let mut moves = DpGrid::new(&shape, 0u8);
        let strides = [scores.stride(0), scores.stride(1), scores.stride(2)];

        // Row-major order visits every predecessor before its successors.
        let mut index = [0usize; 3];
        for here in 1..scores.len() {
            scores.coords_into(here, &mut index);

            let mut best = i32::MIN;
            let mut best_move = 0u8;
            for &step in &MOVES {
                let mut column = [GAP; 3];
                let mut back = 0usize;
                let mut inside = true;
                for axis in 0..3 {
                    if step & (1 << axis) != 0 {
                        if index[axis] == 0 {
                            inside = false;
                            break;
                        }
                        column[axis] = seqs[axis][index[axis] - 1];
                        back += strides[axis];
                    }
                }
                if !inside {
                    continue;
                }

                let candidate = scores.at(here - back) + self.scoring.column_cost(&column);
                if candidate > best {
                    best = candidate;
                    best_move = step;
                }
            }
            scores.set_at(here, best);
            moves.set_at(here, best_move);
        }

        (scores, moves)
    }
}

fn traceback(moves: &DpGrid<u8>, seqs: &[&[u8]; 3]) -> Vec<String> {
    let capacity = seqs.iter().map(|s| s.len()).sum();
    let mut rows: [Vec<u8>; 3] = [
        Vec::with_capacity(capacity),
        Vec::with_capacity(capacity),
        Vec::with_capacity(capacity),
    ];
    let mut index = [seqs[0].len(), seqs[1].len(), seqs[2].len()];

    while index.iter().any(|&i| i > 0) {
        let step = moves.get(&index);
        for axis in 0..3 {
            if step & (1 << axis) != 0 {
                index[axis] -= 1;
                rows[axis].push(seqs[axis][index[axis]]);
            } else {
                rows[axis].push(GAP);
            }
        }
    }

    rows.into_iter()
        .map(|row| row.into_iter().rev().map(char::from).collect())
        .collect()
}
