//! State-space size guard applied before any DP allocation.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, AlignResult};

/// Default ceiling on DP cells per call.
pub const DEFAULT_MAX_CELLS: u64 = 50_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBudget {
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,
}

fn default_max_cells() -> u64 { DEFAULT_MAX_CELLS }

impl Default for ResourceBudget {
    fn default() -> Self {
        Self { max_cells: DEFAULT_MAX_CELLS }
    }
}

impl ResourceBudget {
    pub fn new(max_cells: u64) -> Self {
        Self { max_cells }
    }

    pub fn unlimited() -> Self {
        Self { max_cells: u64::MAX }
    }

    /// Cells of a dense state space with one axis per sequence of the given
    /// lengths, each axis carrying the extra empty-prefix slot.
    ///
    /// Returns `None` when the product does not fit in `u64`.
    pub fn state_space_cells(lengths: &[usize]) -> Option<u64> {
        lengths
            .iter()
            .try_fold(1u64, |acc, &len| acc.checked_mul((len as u64).checked_add(1)?))
    }

    /// Check the state space for `lengths` and return its cell count.
    pub fn check(&self, lengths: &[usize]) -> AlignResult<usize> {
        let required = Self::state_space_cells(lengths);
        match required {
            Some(cells) if cells <= self.max_cells => {
                usize::try_from(cells).map_err(|_| AlignError::ResourceLimit {
                    required,
                    budget: self.max_cells,
                })
            }
            _ => Err(AlignError::ResourceLimit {
                required,
                budget: self.max_cells,
            }),
        }
    }
}
