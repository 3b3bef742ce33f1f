//! Error taxonomy shared by every alignment engine.

use thiserror::Error;

/// Errors that can occur before or during an alignment call.
///
/// Every variant is raised synchronously at the start of a call, before any
/// DP state space is allocated. No partial results are produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource limit exceeded: state space of {} cells exceeds budget of {budget} cells", cells_display(.required))]
    ResourceLimit {
        /// Cells the call would need; `None` when the product overflows.
        required: Option<u64>,
        budget: u64,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AlignError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }
}

fn cells_display(required: &Option<u64>) -> String {
    match required {
        Some(cells) => cells.to_string(),
        None => "more than u64::MAX".to_string(),
    }
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;
