use std::fmt;

use crate::expression::ast::Expression;

/// An accepted expression in both output notations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedExpression {
    /// Plain infix form, e.g. `(2+3)*4`
    pub program: String,
    /// LaTeX form, e.g. `\left(2 + 3\right) \times 4`
    pub latex: String,
}

impl From<&Expression> for RenderedExpression {
    fn from(expr: &Expression) -> Self {
        Self {
            program: expr.to_string(),
            latex: expr.to_latex(),
        }
    }
}

impl From<Expression> for RenderedExpression {
    fn from(expr: Expression) -> Self {
        Self::from(&expr)
    }
}

impl fmt::Display for RenderedExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.program)
    }
}
