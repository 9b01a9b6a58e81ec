/// One input integer, tagged with the input slot it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    pub slot: usize,
    pub value: u32,
}

impl Operand {
    pub fn new(slot: usize, value: u32) -> Self {
        Self { slot, value }
    }
}

/// The four binary operators an expression can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Whether a left operand of the given precedence must be parenthesized
    pub(crate) fn wraps_left(self, child_precedence: u8) -> bool {
        child_precedence < self.precedence()
    }

    /// Whether a right operand of the given precedence must be parenthesized.
    /// Equal precedence only needs parentheses under `-` and `/`.
    pub(crate) fn wraps_right(self, child_precedence: u8) -> bool {
        child_precedence < self.precedence()
            || (child_precedence == self.precedence() && !self.is_commutative())
    }
}

/// Represents arithmetic expressions built from the input operands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Operand(Operand),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

/// Precedence of a bare operand; binds tighter than any operator.
pub(crate) const OPERAND_PRECEDENCE: u8 = 3;

impl Expression {
    pub fn operand(slot: usize, value: u32) -> Self {
        Expression::Operand(Operand::new(slot, value))
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Operand(_) => OPERAND_PRECEDENCE,
            Expression::Binary(op, _, _) => op.precedence(),
        }
    }

    /// Leaves of the tree, left to right
    pub fn operands(&self) -> Vec<Operand> {
        fn collect(expr: &Expression, out: &mut Vec<Operand>) {
            match expr {
                Expression::Operand(operand) => out.push(*operand),
                Expression::Binary(_, l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
