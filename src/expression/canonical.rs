use std::fmt;

use crate::expression::ast::Expression;

/// Normal form of an expression, shared by every tree that differs from it
/// only by the order of `+`/`*` operands or by which equal-valued input
/// operand sits in a leaf.
///
/// Associativity is not folded: `(1+2)+3` and `1+(2+3)` have different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Expression {
    pub fn canonical_key(&self) -> CanonicalKey {
        fn canonical_form(expr: &Expression) -> String {
            match expr {
                Expression::Operand(operand) => operand.value.to_string(),
                Expression::Binary(op, l, r) => {
                    let mut left = canonical_form(l);
                    let mut right = canonical_form(r);
                    if op.is_commutative() && right < left {
                        std::mem::swap(&mut left, &mut right);
                    }
                    format!("({}{}{})", left, op.symbol(), right)
                }
            }
        }

        CanonicalKey(canonical_form(self))
    }
}
