use log::{debug, warn};

use crate::solver::errors::SolverError;

/// # Errors
///
/// Returns an error if there are no operands or more than `max`.
pub fn validate_operands(operands: &[u32], max: usize) -> Result<(), SolverError> {
    debug!("Validating {} operands (max {})", operands.len(), max);

    if operands.is_empty() || operands.len() > max {
        warn!(
            "Rejecting operand list of length {} (allowed 1..={})",
            operands.len(),
            max
        );
        return Err(SolverError::InvalidOperandCount {
            count: operands.len(),
            max,
        });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if `limit` is zero.
pub fn validate_limit(limit: usize) -> Result<(), SolverError> {
    if limit == 0 {
        warn!("Rejecting result limit of 0");
        return Err(SolverError::InvalidLimit(limit));
    }
    Ok(())
}
