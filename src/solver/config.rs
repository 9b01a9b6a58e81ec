use crate::solver::constants::MAX_OPERANDS;

/// Configuration for the expression solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest operand count accepted; anything above `MAX_OPERANDS` is
    /// treated as `MAX_OPERANDS`.
    pub max_operands: usize,
}

impl SolverConfig {
    /// The operand bound actually enforced
    pub fn max_operands(&self) -> usize {
        self.max_operands.min(MAX_OPERANDS)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_operands: MAX_OPERANDS,
        }
    }
}
