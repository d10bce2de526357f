//! Crate-level error type.

use thiserror::Error;

use crate::io::bag::BagError;

/// Errors raised while loading trajectories, evaluating them or writing reports.
#[derive(Error, Debug)]
pub enum EvalError {
    /// A trajectory violates the input contract (empty, unsorted, non-finite time).
    #[error("Invalid trajectory: {0}")]
    InvalidInput(String),

    /// No reference sample could be matched, so there is nothing to analyze.
    #[error("No reference sample matched the logged trajectory")]
    EmptyErrorSeries,

    #[error("Ground truth line {line}: {reason}")]
    GroundTruth { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Bag error: {0}")]
    Bag(#[from] BagError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
