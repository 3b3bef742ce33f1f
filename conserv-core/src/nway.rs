//! Longest common subsequence of four or more sequences.
//!
//! The state space has one axis per sequence and is materialized in full,
//! so time and memory are both `Θ(Π (|seq_i| + 1))`. The budget is checked
//! before anything is allocated.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::budget::ResourceBudget;
use crate::error::{AlignError, AlignResult};
use crate::grid::DpGrid;
use crate::result::LcsResult;
use crate::types::{check_alignable, SequenceRecord};

/// Fewest sequences the N-way engine accepts; smaller inputs go to the
/// pairwise and three-way aligners.
pub const MIN_SEQUENCES: usize = 4;

/// Order in which DP cells are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Row-major, single thread
    #[default]
    Sequential,
    /// Cells grouped by index sum; each group computed in parallel on the
    /// rayon pool. Holds the offsets of one group at a time.
    Wavefront,
}

#[derive(Debug, Clone, Default)]
pub struct NWayLcsEngine {
    budget: ResourceBudget,
    schedule: Schedule,
}

impl NWayLcsEngine {
    pub fn new(budget: ResourceBudget) -> Self {
        Self {
            budget,
            schedule: Schedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn compute(&self, records: &[SequenceRecord]) -> AlignResult<LcsResult> {
        if records.len() < MIN_SEQUENCES {
            return Err(AlignError::invalid_input(format!(
                "N-way LCS needs at least {} sequences, got {}",
                MIN_SEQUENCES,
                records.len()
            )));
        }
        check_alignable(records)?;

        let lengths: Vec<usize> = records.iter().map(SequenceRecord::len).collect();
        let cells = self.budget.check(&lengths)?;
        log::info!(
            "N-way LCS over {} sequences: {} cells ({:?})",
            records.len(),
            cells,
            self.schedule
        );

        let seqs: Vec<&[u8]> = records.iter().map(SequenceRecord::symbols).collect();
        let shape: Vec<usize> = lengths.iter().map(|&len| len + 1).collect();
        let mut grid = DpGrid::new(&shape, 0u32);

        match self.schedule {
            Schedule::Sequential => fill_sequential(&mut grid, &seqs),
            Schedule::Wavefront => fill_wavefront(&mut grid, &seqs),
        }

        let length = grid.get(&lengths) as usize;
        let sequence = reconstruct(&grid, &seqs, lengths);
        debug_assert_eq!(sequence.len(), length);

        Ok(LcsResult { length, sequence })
    }
}

/// Value of one cell from already-filled predecessors.
fn cell_value(grid: &DpGrid<u32>, seqs: &[&[u8]], index: &[usize], offset: usize) -> u32 {
    if index.iter().any(|&i| i == 0) {
        return 0;
    }

    let first = seqs[0][index[0] - 1];
    let all_equal = seqs
        .iter()
        .zip(index)
        .all(|(seq, &i)| seq[i - 1] == first);

    if all_equal {
        let diagonal: usize = (0..grid.dims()).map(|axis| grid.stride(axis)).sum();
        grid.at(offset - diagonal) + 1
    } else {
        (0..grid.dims())
            .map(|axis| grid.at(offset - grid.stride(axis)))
            .max()
            .unwrap_or(0)
    }
}

fn fill_sequential(grid: &mut DpGrid<u32>, seqs: &[&[u8]]) {
    let mut index = vec![0usize; grid.dims()];
    for offset in 0..grid.len() {
        grid.coords_into(offset, &mut index);
        let value = cell_value(grid, seqs, &index, offset);
        grid.set_at(offset, value);
    }
}

fn fill_wavefront(grid: &mut DpGrid<u32>, seqs: &[&[u8]]) {
    let dims = grid.dims();
    for sum in 0..grid.wavefront_count() {
        let front = grid.wavefront(sum);
        let values: Vec<u32> = {
            let view: &DpGrid<u32> = grid;
            front
                .par_iter()
                .map_init(
                    || vec![0usize; dims],
                    |index, &offset| {
                        view.coords_into(offset, index);
                        cell_value(view, seqs, index, offset)
                    },
                )
                .collect()
        };
        for (&offset, value) in front.iter().zip(values) {
            grid.set_at(offset, value);
        }
    }
}

/// Walk back from the full index. Ties between single-axis moves go to the
/// lowest axis.
fn reconstruct(grid: &DpGrid<u32>, seqs: &[&[u8]], mut index: Vec<usize>) -> String {
    let mut symbols = Vec::with_capacity(grid.get(&index) as usize);

    while index.iter().all(|&i| i > 0) {
        let first = seqs[0][index[0] - 1];
        if seqs.iter().zip(&index).all(|(seq, &i)| seq[i - 1] == first) {
            symbols.push(first);
            index.iter_mut().for_each(|i| *i -= 1);
            continue;
        }

        let offset = grid.offset(&index);
        let current = grid.at(offset);
        let axis = (0..grid.dims())
            .find(|&axis| grid.at(offset - grid.stride(axis)) == current)
            .unwrap_or(0);
        index[axis] -= 1;
    }

    symbols.into_iter().rev().map(char::from).collect()
}
