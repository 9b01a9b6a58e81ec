use crate::expression::ast::{Expression, OPERAND_PRECEDENCE, Operator};

impl Operator {
    /// Combine two already-rendered LaTeX operands.
    /// Division becomes a fraction; the others stay infix.
    pub fn to_latex(self, left: &str, right: &str) -> String {
        match self {
            Operator::Add => format!("{} + {}", left, right),
            Operator::Sub => format!("{} - {}", left, right),
            Operator::Mul => format!("{} \\times {}", left, right),
            Operator::Div => format!("\\frac{{{}}}{{{}}}", left, right),
        }
    }
}

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \times for multiplication
    /// - Uses \frac for division, never parenthesizing inside it
    /// - Parenthesizes like the program notation otherwise
    pub fn to_latex(&self) -> String {
        // A fraction is visually self-delimiting, so it binds like an operand.
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Operand(_) | Expression::Binary(Operator::Div, _, _) => {
                    OPERAND_PRECEDENCE
                }
                Expression::Binary(op, _, _) => op.precedence(),
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Operand(operand) => operand.value.to_string(),
                Expression::Binary(Operator::Div, l, r) => Operator::Div.to_latex(&fmt(l), &fmt(r)),
                Expression::Binary(op, l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if op.wraps_left(precedence(l)) {
                        ls = wrap_parens(ls);
                    }
                    if op.wraps_right(precedence(r)) {
                        rs = wrap_parens(rs);
                    }
                    op.to_latex(&ls, &rs)
                }
            }
        }

        fmt(self)
    }
}
