pub mod constants;
mod config;
mod core;
mod errors;
mod validation;

pub use config::SolverConfig;
pub use core::{ExpressionSolver, Matches, SearchRequest, SearchStats};
pub use errors::SolverError;
pub use validation::{validate_limit, validate_operands};
