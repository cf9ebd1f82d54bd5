//! Sampler-shaped split policy
//!
//! Large flexible ranges are halved. Small ones get their surplus divided by
//! a sampler draw whose expectation matches the image proportion, which gives
//! realistic, skewed group sizes while the per-value reservation keeps the
//! function surjective whatever the sampler returns.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use super::node::flexible_range;
use super::recursive::{CachingRecursiveMonotonic, SplitStrategy};
use super::{DEFAULT_CACHE_DEPTH, DEFAULT_SAMPLER_MAX_LENGTH};
use crate::random::TreeRandom;
use crate::range::Range;
use crate::sampler::{check_sampler_max_length, SamplerFactory, SamplerKind};
use crate::util::ratio_to_f64;
use crate::Result;

/// Split strategy mixing fast halving with seeded sampling.
#[derive(Debug, Clone)]
pub struct SurjectiveSplit<F: SamplerFactory = SamplerKind> {
    tree_random: TreeRandom,
    sampler_factory: F,
    sampler_max_length: BigUint,
}

impl<F: SamplerFactory> SurjectiveSplit<F> {
    /// `sampler_max_length` must be positive and within the factory's trial-count limit.
    pub fn new(tree_random: TreeRandom, sampler_factory: F, sampler_max_length: BigUint) -> Result<Self> {
        check_sampler_max_length(&sampler_factory, &sampler_max_length)?;
        Ok(Self {
            tree_random,
            sampler_factory,
            sampler_max_length,
        })
    }

    /// Largest flexible range still decided by the sampler.
    pub fn sampler_max_length(&self) -> &BigUint {
        &self.sampler_max_length
    }

    /// Root of the random tree the draws are keyed under.
    pub fn tree_random(&self) -> &TreeRandom {
        &self.tree_random
    }
}

impl<F: SamplerFactory> SplitStrategy for SurjectiveSplit<F> {
    fn split(
        &self,
        domain: &Range,
        image: &Range,
        image_split: &BigUint,
        _level: usize,
    ) -> Result<BigUint> {
        let flexible = flexible_range(domain, image, image_split);
        let length = flexible.size();

        if length.is_zero() {
            return Ok(flexible.from().clone());
        }
        if length > self.sampler_max_length {
            return Ok(flexible.from() + (length >> 1u32));
        }

        let left_count = image_split - image.from();
        let probability = ratio_to_f64(&left_count, &image.size());
        let seed = self.tree_random.sub(image_split).next_u64();
        let extra = self
            .sampler_factory
            .create(seed, &length, probability)?
            .sample();
        trace!(
            image_split = %image_split,
            trials = %length,
            probability,
            extra = %extra,
            "sampled split"
        );
        Ok(flexible.from() + extra)
    }

    fn name(&self) -> &'static str {
        "surjective"
    }
}

/// Recursive monotonic with the sampler-shaped split policy.
pub type SurjectiveMonotonic<F = SamplerKind> = CachingRecursiveMonotonic<SurjectiveSplit<F>>;

impl CachingRecursiveMonotonic<SurjectiveSplit<SamplerKind>> {
    /// Binomial sampler, default cache depth and sampler threshold.
    pub fn new(tree_random: TreeRandom, size: BigUint, image_size: BigUint) -> Result<Self> {
        Self::with_options(
            tree_random,
            SamplerKind::default(),
            size,
            image_size,
            DEFAULT_CACHE_DEPTH,
            BigUint::from(DEFAULT_SAMPLER_MAX_LENGTH),
        )
    }
}

impl<F: SamplerFactory> CachingRecursiveMonotonic<SurjectiveSplit<F>> {
    /// Fully specified construction.
    pub fn with_options(
        tree_random: TreeRandom,
        sampler_factory: F,
        size: BigUint,
        image_size: BigUint,
        cache_depth: usize,
        sampler_max_length: BigUint,
    ) -> Result<Self> {
        let strategy = SurjectiveSplit::new(tree_random, sampler_factory, sampler_max_length)?;
        Self::with_strategy(size, image_size, cache_depth, strategy)
    }
}
