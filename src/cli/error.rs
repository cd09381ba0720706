//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Domain(e) => match e {
                DomainError::InvalidConfidence { .. } => crate::exitcode::USAGE,
                DomainError::PositiveExceedsTotal { .. }
                | DomainError::EmptySample
                | DomainError::NotEnoughLevels { .. }
                | DomainError::DegenerateCounts => crate::exitcode::DATAERR,
            },
        }
    }
}
