//! Construction parameters for monotonic functions
//!
//! Builder-style: start from [`MonotonicConfig::new`] and override with the
//! `with_*` methods. Everything is validated in [`MonotonicConfig::validate`],
//! which [`MonotonicConfig::build`] calls before constructing anything.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::hasher::HasherKind;
use crate::monotonic::{
    check_sizes, FastMonotonic, FastSplit, LinearMonotonic, Monotonic, SurjectiveMonotonic,
    DEFAULT_CACHE_DEPTH, DEFAULT_SAMPLER_MAX_LENGTH,
};
use crate::random::TreeRandom;
use crate::sampler::{check_sampler_max_length, SamplerKind};
use crate::{MonotonicError, Result};

/// Monotonic implementation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    /// Recursive splitting, sampler-shaped group sizes
    #[default]
    Surjective,
    /// Recursive splitting, plain halving
    Fast,
    /// Closed-form proportional mapping
    Linear,
}

impl StrategyKind {
    /// All selectable strategies.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Surjective,
        StrategyKind::Fast,
        StrategyKind::Linear,
    ];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Surjective => "surjective",
            StrategyKind::Fast => "fast",
            StrategyKind::Linear => "linear",
        }
    }

    /// Whether the strategy reads the seed, hasher and sampler settings.
    pub fn is_seeded(&self) -> bool {
        matches!(self, StrategyKind::Surjective)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = MonotonicError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MonotonicError::UnknownKind {
                category: "strategy",
                name: s.to_string(),
            })
    }
}

/// Everything needed to construct a monotonic function.
///
/// Two functions built from equal configs answer identically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonotonicConfig {
    /// Domain length
    pub size: BigUint,
    /// Image length (`1 <= image_size <= size`)
    pub image_size: BigUint,
    /// Root seed of the random tree
    pub seed: u64,
    /// Recursion levels whose split points are memoized
    pub cache_depth: usize,
    /// Flexible ranges longer than this are halved instead of sampled
    pub sampler_max_length: BigUint,
    /// Hash function behind the random tree
    pub hasher: HasherKind,
    /// Sampler backend
    pub sampler: SamplerKind,
    /// Implementation to build
    pub strategy: StrategyKind,
}

impl Default for MonotonicConfig {
    fn default() -> Self {
        Self {
            size: BigUint::from(1u32),
            image_size: BigUint::from(1u32),
            seed: 0,
            cache_depth: DEFAULT_CACHE_DEPTH,
            sampler_max_length: BigUint::from(DEFAULT_SAMPLER_MAX_LENGTH),
            hasher: HasherKind::default(),
            sampler: SamplerKind::default(),
            strategy: StrategyKind::default(),
        }
    }
}

impl MonotonicConfig {
    /// Defaults for everything but the two sizes.
    pub fn new(size: impl Into<BigUint>, image_size: impl Into<BigUint>) -> Self {
        Self {
            size: size.into(),
            image_size: image_size.into(),
            ..Self::default()
        }
    }

    /// Set the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many recursion levels are memoized.
    pub fn with_cache_depth(mut self, cache_depth: usize) -> Self {
        self.cache_depth = cache_depth;
        self
    }

    /// Set the sampling threshold.
    pub fn with_sampler_max_length(mut self, sampler_max_length: impl Into<BigUint>) -> Self {
        self.sampler_max_length = sampler_max_length.into();
        self
    }

    /// Choose the hasher.
    pub fn with_hasher(mut self, hasher: HasherKind) -> Self {
        self.hasher = hasher;
        self
    }

    /// Choose the sampler backend.
    pub fn with_sampler(mut self, sampler: SamplerKind) -> Self {
        self.sampler = sampler;
        self
    }

    /// Choose the implementation.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Root of the random tree this config describes.
    pub fn tree_random(&self) -> TreeRandom {
        TreeRandom::new(self.seed, self.hasher)
    }

    /// Check every parameter without building.
    pub fn validate(&self) -> Result<()> {
        check_sizes(&self.size, &self.image_size)?;
        if self.strategy.is_seeded() {
            check_sampler_max_length(&self.sampler, &self.sampler_max_length)?;
        }
        Ok(())
    }

    /// Validate and construct.
    pub fn build(&self) -> Result<Box<dyn Monotonic>> {
        self.validate()?;
        let size = self.size.clone();
        let image_size = self.image_size.clone();
        let monotonic: Box<dyn Monotonic> = match self.strategy {
            StrategyKind::Surjective => Box::new(SurjectiveMonotonic::with_options(
                self.tree_random(),
                self.sampler,
                size,
                image_size,
                self.cache_depth,
                self.sampler_max_length.clone(),
            )?),
            StrategyKind::Fast => Box::new(FastMonotonic::with_strategy(
                size,
                image_size,
                self.cache_depth,
                FastSplit,
            )?),
            StrategyKind::Linear => Box::new(LinearMonotonic::new(size, image_size)?),
        };
        Ok(monotonic)
    }
}
