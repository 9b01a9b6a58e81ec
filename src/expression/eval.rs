use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::expression::ast::{Expression, Operand, Operator};
use crate::expression::errors::ExpressionError;

impl Operand {
    pub fn to_rational(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(self.value))
    }
}

impl Operator {
    /// # Errors
    ///
    /// Returns an error when dividing by zero.
    pub fn apply(
        self,
        left: &BigRational,
        right: &BigRational,
    ) -> Result<BigRational, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right.is_zero() {
                    trace!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl Expression {
    /// Evaluate the expression with exact rational arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error when any division in the tree has a zero divisor.
    pub fn evaluate(&self) -> Result<BigRational, ExpressionError> {
        match self {
            Expression::Operand(operand) => Ok(operand.to_rational()),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                op.apply(&left, &right)
            }
        }
    }
}
