//! Lazy enumeration of every expression tree over a set of operands

mod core;
mod types;

pub(crate) use core::ExpressionIterator;

#[cfg(test)]
mod tests;
