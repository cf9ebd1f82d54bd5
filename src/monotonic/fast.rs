//! Uniform halving split policy
//!
//! Always cuts the flexible range at its floor midpoint. No randomness, no
//! sampling; group sizes come out as even as the reservation allows.

use num_bigint::BigUint;

use super::node::flexible_range;
use super::recursive::{CachingRecursiveMonotonic, SplitStrategy};
use super::DEFAULT_CACHE_DEPTH;
use crate::range::Range;
use crate::Result;

/// Split strategy that halves the flexible range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastSplit;

impl SplitStrategy for FastSplit {
    fn split(
        &self,
        domain: &Range,
        image: &Range,
        image_split: &BigUint,
        _level: usize,
    ) -> Result<BigUint> {
        let flexible = flexible_range(domain, image, image_split);
        Ok(flexible.from() + (flexible.size() >> 1u32))
    }

    fn name(&self) -> &'static str {
        "fast"
    }
}

/// Recursive monotonic with plain halving.
pub type FastMonotonic = CachingRecursiveMonotonic<FastSplit>;

impl CachingRecursiveMonotonic<FastSplit> {
    /// Default cache depth, matching what [`crate::MonotonicConfig`] builds.
    pub fn new(size: BigUint, image_size: BigUint) -> Result<Self> {
        Self::with_strategy(size, image_size, DEFAULT_CACHE_DEPTH, FastSplit)
    }
}
