//! Expression Finder - A library for finding arithmetic expressions that hit a target
//!
//! Given a handful of non-negative integers, this library enumerates every way to
//! combine all of them with `+`, `-`, `*`, `/` and parentheses, keeps the
//! expressions whose exact value equals a target, drops duplicates that differ only
//! by operand order, and renders each survivor as plain text and as LaTeX.

pub mod expression;
mod iterator;
pub mod solver;
mod utils;

// Re-export the main public API
pub use expression::{CanonicalKey, Expression, ExpressionError, RenderedExpression};
pub use solver::constants::{DEFAULT_LIMIT, MAX_OPERANDS};
pub use solver::{ExpressionSolver, SearchRequest, SolverConfig, SolverError};

/// Find up to `limit` distinct expressions over `operands` that evaluate to `target`
///
/// This is a convenience function that uses a default solver. Every operand is used
/// exactly once in each result.
///
/// # Arguments
///
/// * `operands` - Between 1 and [`MAX_OPERANDS`] non-negative integers
/// * `target` - The value to hit exactly
/// * `limit` - Maximum number of results, at least 1
///
/// # Returns
///
/// * `Ok(results)` - Matching expressions in enumeration order; empty if none match
/// * `Err(SolverError)` - If the operand count or the limit is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `operands` is empty or has more than [`MAX_OPERANDS`] entries
/// * `limit` is 0
///
/// # Examples
///
/// ```
/// use expression_finder::search;
///
/// match search(&[2, 3, 4], 20, 10) {
///     Ok(results) => {
///         for result in results {
///             println!("{} | {}", result.program, result.latex);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(
    operands: &[u32],
    target: i64,
    limit: usize,
) -> Result<Vec<RenderedExpression>, SolverError> {
    ExpressionSolver::default().search(operands, target, limit)
}
