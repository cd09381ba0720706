//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent statistical input violations.
/// These are independent of CLI concerns.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("confidence level must be strictly between 0 and 1: {value}")]
    InvalidConfidence { value: f64 },

    #[error("positive count exceeds total: {positive} > {total}")]
    PositiveExceedsTotal { positive: u64, total: u64 },

    #[error("total count must be greater than zero")]
    EmptySample,

    #[error("at least two rating levels are required, got {got}")]
    NotEnoughLevels { got: usize },

    #[error("rating counts are all zero")]
    DegenerateCounts,
}
