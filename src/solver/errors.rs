use thiserror::Error;

/// Errors that reject a search before any enumeration happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Expected between 1 and {max} operands, got {count}")]
    InvalidOperandCount { count: usize, max: usize },
    #[error("Result limit must be at least 1, got {0}")]
    InvalidLimit(usize),
}
