//! Leaf-value sources.
//!
//! The core never parses raw input. Whoever collects terminal values (a
//! prompt loop, a config file, a test) hands over ready integers through
//! [`LeafValueSource`], one call per leaf from left to right.

use std::convert::Infallible;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TreeError;
use crate::types::Node;

/// Supplies terminal values to [`GameTree::assign_leaves`](crate::GameTree::assign_leaves).
pub trait LeafValueSource {
    type Error;

    /// Called once with the tree's leaf count before any `value_for`.
    fn expect_leaves(&mut self, _count: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    fn value_for(&mut self, leaf: &Node) -> Result<i32, Self::Error>;
}

/// Values taken from a slice in leaf order.
///
/// The slice must hold exactly one value per leaf.
#[derive(Debug, Clone)]
pub struct FixedValues<'a> {
    values: &'a [i32],
    next: usize,
    leaves: Option<usize>,
}

impl<'a> FixedValues<'a> {
    pub fn new(values: &'a [i32]) -> Self {
        Self {
            values,
            next: 0,
            leaves: None,
        }
    }
}

impl LeafValueSource for FixedValues<'_> {
    type Error = TreeError;

    fn expect_leaves(&mut self, count: usize) -> Result<(), TreeError> {
        if self.values.len() != count {
            return Err(TreeError::LeafCountMismatch {
                expected: count,
                got: self.values.len(),
            });
        }
        self.leaves = Some(count);
        Ok(())
    }

    fn value_for(&mut self, _leaf: &Node) -> Result<i32, TreeError> {
        let value = self
            .values
            .get(self.next)
            .copied()
            .ok_or(TreeError::LeafCountMismatch {
                expected: self.leaves.unwrap_or(self.next + 1),
                got: self.values.len(),
            })?;
        self.next += 1;
        Ok(value)
    }
}

/// Uniform values from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomValues {
    rng: StdRng,
    range: RangeInclusive<i32>,
}

impl RandomValues {
    /// Values fall in `[a, b]`; the bounds may be given in either order.
    pub fn new(seed: u64, a: i32, b: i32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range: a.min(b)..=a.max(b),
        }
    }
}

impl LeafValueSource for RandomValues {
    type Error = Infallible;

    fn value_for(&mut self, _leaf: &Node) -> Result<i32, Infallible> {
        Ok(self.rng.gen_range(self.range.clone()))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
