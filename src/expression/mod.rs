//! Expression trees, their exact evaluation, canonical keys and rendering

mod ast;
mod canonical;
mod display;
mod errors;
mod eval;
mod latex;
mod rendered;

pub use ast::{Expression, Operand, Operator};
pub use canonical::CanonicalKey;
pub use errors::ExpressionError;
pub use rendered::RenderedExpression;
