use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Program notation: infix, no spaces, only the parentheses needed to
/// re-parse to the same value.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Operand(operand) => write!(f, "{}", operand.value),
                Expression::Binary(op, l, r) => {
                    let need_l = op.wraps_left(l.precedence());
                    let need_r = op.wraps_right(r.precedence());
                    write_with_parens(f, l, need_l)?;
                    write!(f, "{}", op)?;
                    write_with_parens(f, r, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
