use std::collections::HashSet;

use crate::expression::{Expression, Operator};
use crate::iterator::ExpressionIterator;
use crate::iterator::types::Placement;

fn iter_expressions(values: &[u32]) -> ExpressionIterator {
    ExpressionIterator::from_values(values)
}

/// Trees over n operands: a leaf for n = 1, otherwise six placements for
/// every pair of subtrees of every split.
fn expected_tree_count(n: usize) -> usize {
    match n {
        1 => 1,
        2 => 6,
        3 => 108,
        4 => 3240,
        _ => 0,
    }
}

#[test]
fn iterator_yields_nothing_for_no_operands() {
    let mut it = iter_expressions(&[]);
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn iterator_yields_single_leaf_for_one_operand() {
    let exprs: Vec<Expression> = iter_expressions(&[5]).collect();
    assert_eq!(exprs, vec![Expression::operand(0, 5)]);
}

#[test]
fn iterator_two_operands_emits_every_placement() {
    let exprs: Vec<String> = iter_expressions(&[2, 3]).map(|e| e.to_string()).collect();
    assert_eq!(exprs, vec!["2+3", "2-3", "3-2", "2*3", "2/3", "3/2"]);
}

#[test]
fn iterator_tree_counts_match_closed_form() {
    for n in 1..=4 {
        let values: Vec<u32> = (1..=n as u32).collect();
        let count = iter_expressions(&values).count();
        assert_eq!(count, expected_tree_count(n), "operand count {}", n);
    }
}

#[test]
fn iterator_never_repeats_a_shape() {
    let exprs: Vec<Expression> = iter_expressions(&[1, 2, 3, 4]).collect();
    let unique: HashSet<&Expression> = exprs.iter().collect();
    assert_eq!(unique.len(), exprs.len());
}

#[test]
fn iterator_uses_every_operand_exactly_once() {
    for expr in iter_expressions(&[7, 7, 2, 9]) {
        let mut slots: Vec<usize> = expr.operands().iter().map(|o| o.slot).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2, 3], "bad tree {}", expr);
    }
}

#[test]
fn iterator_keeps_equal_values_as_distinct_operands() {
    // 8 and 8 still give both orientations of the subtraction
    let exprs: Vec<Expression> = iter_expressions(&[8, 8]).collect();
    assert_eq!(exprs.len(), 6);
    assert!(exprs.contains(&Expression::binary(
        Operator::Sub,
        Expression::operand(0, 8),
        Expression::operand(1, 8),
    )));
    assert!(exprs.contains(&Expression::binary(
        Operator::Sub,
        Expression::operand(1, 8),
        Expression::operand(0, 8),
    )));
}

#[test]
fn iterator_order_is_deterministic() {
    let first: Vec<Expression> = iter_expressions(&[3, 1, 4]).collect();
    let second: Vec<Expression> = iter_expressions(&[3, 1, 4]).collect();
    assert_eq!(first, second);
}

#[test]
fn iterator_starts_with_smallest_left_subtree() {
    // The first split puts the first operand alone on the left.
    let first = iter_expressions(&[1, 2, 3]).next();
    assert!(
        matches!(
            &first,
            Some(Expression::Binary(Operator::Add, l, _)) if **l == Expression::operand(0, 1)
        ),
        "unexpected first tree {:?}",
        first
    );
}

#[test]
fn iterator_is_lazy_over_the_full_set() {
    let mut it = ExpressionIterator::from_values(&[1, 2, 3, 4, 5]);
    let taken: Vec<Expression> = it.by_ref().take(10).collect();
    assert_eq!(taken.len(), 10);
    assert!(it.next().is_some());
}

#[test]
fn placement_reversed_swaps_operands() {
    let a = Expression::operand(0, 4);
    let b = Expression::operand(1, 2);
    assert_eq!(Placement::Reversed(Operator::Div).combine(&a, &b).to_string(), "2/4");
    assert_eq!(Placement::Forward(Operator::Div).combine(&a, &b).to_string(), "4/2");
}
