use crate::expression::{Expression, Operator};

/// How a (left, right) pair of subtrees is joined into one tree.
///
/// Splits are unordered, so non-commutative operators are also applied with
/// the halves swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Forward(Operator),
    Reversed(Operator),
}

impl Placement {
    /// Every placement, in emission order
    pub const ALL: [Placement; 6] = [
        Placement::Forward(Operator::Add),
        Placement::Forward(Operator::Sub),
        Placement::Reversed(Operator::Sub),
        Placement::Forward(Operator::Mul),
        Placement::Forward(Operator::Div),
        Placement::Reversed(Operator::Div),
    ];

    pub fn combine(self, left: &Expression, right: &Expression) -> Expression {
        match self {
            Placement::Forward(op) => Expression::binary(op, left.clone(), right.clone()),
            Placement::Reversed(op) => Expression::binary(op, right.clone(), left.clone()),
        }
    }
}

/// Next (split, left tree, right tree, placement) to emit for the full set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombineCursor {
    pub split_idx: usize,
    pub left_idx: usize,
    pub right_idx: usize,
    pub placement_idx: usize,
}

impl CombineCursor {
    pub fn at_split(split_idx: usize) -> Self {
        Self {
            split_idx,
            ..Self::default()
        }
    }

    /// Step to the next placement, rolling over into the next right tree and
    /// then the next left tree.
    pub fn advance(&mut self, right_len: usize) {
        self.placement_idx += 1;
        if self.placement_idx == Placement::ALL.len() {
            self.placement_idx = 0;
            self.right_idx += 1;
            if self.right_idx >= right_len {
                self.right_idx = 0;
                self.left_idx += 1;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum GenerationState {
    SingleOperand,
    Combining(CombineCursor),
    Exhausted,
}
