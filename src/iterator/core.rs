use std::collections::HashMap;
use std::iter::FusedIterator;

use log::debug;

use crate::expression::{Expression, Operand};
use crate::utils::{Bipartition, OperandSet, full_set, generate_bipartitions, slots};

use super::types::{CombineCursor, GenerationState, Placement};

/// Yields every expression tree over the full operand set, one at a time.
///
/// Trees over proper subsets are built once per subset and memoized; trees
/// over the full set are produced on demand and never stored. No structural
/// shape is produced twice.
///
/// Operand sets are bitmasks, so the enumerator is only reachable through the
/// solver, which rejects anything above `MAX_OPERANDS` first.
#[derive(Debug, Clone)]
pub struct ExpressionIterator {
    operands: Vec<Operand>,
    splits: Vec<Bipartition>,
    subtrees: HashMap<OperandSet, Vec<Expression>>,
    state: GenerationState,
}

impl ExpressionIterator {
    pub fn new(operands: Vec<Operand>) -> Self {
        let full = full_set(operands.len());
        let splits = generate_bipartitions(full);

        let state = match operands.len() {
            0 => GenerationState::Exhausted,
            1 => GenerationState::SingleOperand,
            _ => GenerationState::Combining(CombineCursor::at_split(0)),
        };

        debug!(
            "Initialized expression enumerator with {} operands ({} top-level splits)",
            operands.len(),
            splits.len()
        );

        Self {
            operands,
            splits,
            subtrees: HashMap::new(),
            state,
        }
    }

    /// Build an enumerator over `values`, slotted in input order
    pub fn from_values(values: &[u32]) -> Self {
        let operands = values
            .iter()
            .enumerate()
            .map(|(slot, &value)| Operand::new(slot, value))
            .collect();
        Self::new(operands)
    }

    /// Build and cache every tree over a proper subset of the operands
    fn build_subtrees(&mut self, set: OperandSet) {
        if self.subtrees.contains_key(&set) {
            return;
        }

        let trees = if set.count_ones() == 1 {
            slots(set)
                .filter_map(|slot| self.operands.get(slot).copied())
                .map(Expression::Operand)
                .collect()
        } else {
            let mut trees = Vec::new();
            for split in generate_bipartitions(set) {
                self.build_subtrees(split.left);
                self.build_subtrees(split.right);

                if let (Some(lefts), Some(rights)) = (
                    self.subtrees.get(&split.left),
                    self.subtrees.get(&split.right),
                ) {
                    for left in lefts {
                        for right in rights {
                            trees.extend(
                                Placement::ALL
                                    .iter()
                                    .map(|placement| placement.combine(left, right)),
                            );
                        }
                    }
                }
            }
            trees
        };

        debug!("Cached {} subtrees for operand set {:#b}", trees.len(), set);
        self.subtrees.insert(set, trees);
    }

    fn subtree_count(&self, set: OperandSet) -> usize {
        self.subtrees.get(&set).map_or(0, Vec::len)
    }

    /// Handle the single-operand input: the leaf itself is the only tree
    fn handle_single_operand(&mut self) -> Option<Expression> {
        self.state = GenerationState::Exhausted;
        self.operands.first().copied().map(Expression::Operand)
    }

    /// Emit the tree under `cursor` and store the advanced cursor
    fn handle_combining(&mut self, mut cursor: CombineCursor) -> Option<Expression> {
        loop {
            let Some(split) = self.splits.get(cursor.split_idx).copied() else {
                debug!("All {} top-level splits exhausted", self.splits.len());
                self.state = GenerationState::Exhausted;
                return None;
            };

            self.build_subtrees(split.left);
            self.build_subtrees(split.right);

            if cursor.left_idx >= self.subtree_count(split.left) {
                cursor = CombineCursor::at_split(cursor.split_idx + 1);
                continue;
            }

            let left = self
                .subtrees
                .get(&split.left)
                .and_then(|trees| trees.get(cursor.left_idx));
            let right = self
                .subtrees
                .get(&split.right)
                .and_then(|trees| trees.get(cursor.right_idx));
            let placement = Placement::ALL.get(cursor.placement_idx);

            let expr = match (left, right, placement) {
                (Some(left), Some(right), Some(placement)) => Some(placement.combine(left, right)),
                _ => None,
            };

            cursor.advance(self.subtree_count(split.right));

            if let Some(expr) = expr {
                self.state = GenerationState::Combining(cursor);
                return Some(expr);
            }
        }
    }
}

impl Iterator for ExpressionIterator {
    type Item = Expression;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            GenerationState::SingleOperand => self.handle_single_operand(),
            GenerationState::Combining(cursor) => self.handle_combining(cursor),
            GenerationState::Exhausted => None,
        }
    }
}

impl FusedIterator for ExpressionIterator {}
