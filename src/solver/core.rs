use std::collections::HashSet;
use std::iter::FusedIterator;

use log::{debug, info, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use rayon::prelude::*;

use crate::expression::{CanonicalKey, Expression, RenderedExpression};
use crate::iterator::ExpressionIterator;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::validation::{validate_limit, validate_operands};

/// Counters collected while walking the enumerated trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Trees taken from the enumerator
    pub evaluated: usize,
    /// Trees discarded for dividing by zero
    pub invalid: usize,
    /// Trees whose value equals the target, duplicates included
    pub matched: usize,
    /// Matching trees dropped as duplicates
    pub duplicates: usize,
}

/// Lazy stream of trees that evaluate to the target, without duplicates.
///
/// A matching tree is a duplicate when its canonical key, or its rendering in
/// both notations, was already produced by this stream.
#[derive(Debug, Clone)]
pub struct Matches {
    trees: ExpressionIterator,
    target: BigRational,
    seen_keys: HashSet<CanonicalKey>,
    seen_rendered: HashSet<RenderedExpression>,
    stats: SearchStats,
}

impl Matches {
    fn new(trees: ExpressionIterator, target: i64) -> Self {
        Self {
            trees,
            target: BigRational::from_integer(BigInt::from(target)),
            seen_keys: HashSet::new(),
            seen_rendered: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Iterator for Matches {
    type Item = Expression;

    fn next(&mut self) -> Option<Self::Item> {
        for expr in self.trees.by_ref() {
            self.stats.evaluated += 1;

            let value = match expr.evaluate() {
                Ok(value) => value,
                Err(e) => {
                    trace!("Discarding {}: {}", expr, e);
                    self.stats.invalid += 1;
                    continue;
                }
            };

            if value != self.target {
                continue;
            }
            self.stats.matched += 1;

            let key = expr.canonical_key();
            let rendered = RenderedExpression::from(&expr);
            if self.seen_keys.contains(&key) || self.seen_rendered.contains(&rendered) {
                debug!("Skipping duplicate match {} (key {})", rendered, key);
                self.stats.duplicates += 1;
                continue;
            }
            self.seen_keys.insert(key);
            self.seen_rendered.insert(rendered);

            debug!("Accepted {} = {}", expr, self.target);
            return Some(expr);
        }
        None
    }
}

impl FusedIterator for Matches {}

/// One independent search, for batch use with [`ExpressionSolver::search_many`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub operands: Vec<u32>,
    pub target: i64,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(operands: Vec<u32>, target: i64, limit: usize) -> Self {
        Self {
            operands,
            target,
            limit,
        }
    }
}

/// Main solver for finding expressions that match a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Stream every distinct tree over `operands` that evaluates to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidOperandCount`] when `operands` is empty
    /// or longer than the configured maximum.
    pub fn matches(&self, operands: &[u32], target: i64) -> Result<Matches, SolverError> {
        validate_operands(operands, self.config.max_operands())?;
        Ok(Matches::new(ExpressionIterator::from_values(operands), target))
    }

    /// Find up to `limit` distinct expressions over `operands` equal to `target`,
    /// in enumeration order. Enumeration stops as soon as `limit` is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand count is out of range or `limit` is 0.
    pub fn search(
        &self,
        operands: &[u32],
        target: i64,
        limit: usize,
    ) -> Result<Vec<RenderedExpression>, SolverError> {
        validate_operands(operands, self.config.max_operands())?;
        validate_limit(limit)?;

        info!(
            "Searching for up to {} expressions over {:?} that equal {}",
            limit, operands, target
        );

        let mut matches = Matches::new(ExpressionIterator::from_values(operands), target);
        let results: Vec<RenderedExpression> = matches
            .by_ref()
            .take(limit)
            .map(RenderedExpression::from)
            .collect();

        let stats = matches.stats();
        info!(
            "Found {} expressions after evaluating {} trees ({} invalid, {} duplicates)",
            results.len(),
            stats.evaluated,
            stats.invalid,
            stats.duplicates
        );

        Ok(results)
    }

    /// Run independent searches in parallel, one result per request in
    /// request order.
    pub fn search_many(
        &self,
        requests: &[SearchRequest],
    ) -> Vec<Result<Vec<RenderedExpression>, SolverError>> {
        info!("Running {} searches in parallel", requests.len());

        requests
            .par_iter()
            .map(|request| self.search(&request.operands, request.target, request.limit))
            .collect()
    }
}
