//! # Seeded monotonic surjective functions
//!
//! Virtual datasets never store their rows: every value is recomputed from a
//! seed on demand. The primitive that makes grouping and indexing possible
//! is a monotonic surjective step function `f: [0, size) -> [0, image_size)`
//! over arbitrary-precision integers, which is
//!
//! 1. **Non-decreasing**: `i1 < i2` implies `f(i1) <= f(i2)`
//! 2. **Surjective**: every value in `[0, image_size)` has a preimage
//! 3. **Point-wise**: `at(i)` costs `O(log image_size)` splits, no neighbours evaluated
//! 4. **Invertible**: `indices_of(v)` returns the contiguous preimage of `v`
//! 5. **Reproducible**: equal configuration gives equal answers in any process
//!
//! ## Building blocks
//!
//! - [`hasher`]: stateless keyed hashes (BLAKE3 keyed mode or a fast mixer)
//! - [`random`]: [`TreeRandom`], streams addressable by key path
//! - [`sampler`]: seeded Binomial(n, p) draws behind a factory interface
//! - [`monotonic`]: the recursive split engine and its strategies
//!
//! ## Usage Example
//!
//! ```
//! use holorange::{Monotonic, MonotonicConfig};
//! use num_bigint::BigUint;
//!
//! let monotonic = MonotonicConfig::new(10u32, 3u32).with_seed(42).build()?;
//! let value = monotonic.at(&BigUint::from(7u32))?;
//! assert!(monotonic.indices_of(&value)?.contains(&BigUint::from(7u32)));
//! # Ok::<(), holorange::MonotonicError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules, leaves first
pub mod hasher;     // Keyed hash functions
pub mod random;     // Tree-addressable random streams
pub mod sampler;    // Seeded count samplers
pub mod range;      // Arbitrary-precision intervals
pub mod monotonic;  // Recursive monotonic engine
pub mod config;     // Builder-style construction
pub mod util;       // Big-integer arithmetic helpers

// Re-exports for convenience
pub use config::{MonotonicConfig, StrategyKind};
pub use hasher::{Hasher, HasherKind};
pub use monotonic::{
    CachingRecursiveMonotonic, FastMonotonic, FastSplit, LinearMonotonic, Monotonic,
    SplitStrategy, SurjectiveMonotonic, SurjectiveSplit,
};
pub use random::TreeRandom;
pub use range::Range;
pub use sampler::{Sampler, SamplerFactory, SamplerKind};

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by construction, queries and sampler backends
#[derive(Error, Debug)]
pub enum MonotonicError {
    /// Fewer domain slots than image values
    #[error("image size {image_size} exceeds size {size}")]
    ImageExceedsSize {
        /// Requested domain length
        size: BigUint,
        /// Requested image length
        image_size: BigUint,
    },

    /// Image must contain at least one value
    #[error("image size must be at least 1")]
    EmptyImage,

    /// A configuration knob is out of its valid range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Index query outside `[0, size)`
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// Requested index
        index: BigUint,
        /// Domain length
        size: BigUint,
    },

    /// Value query outside `[0, image_size)`
    #[error("value {value} out of range for image size {image_size}")]
    ValueOutOfRange {
        /// Requested value
        value: BigUint,
        /// Image length
        image_size: BigUint,
    },

    /// Trial count beyond what a sampler backend supports
    #[error("{backend} sampler cannot draw from {trial_count} trials (limit {limit})")]
    TrialCountTooLarge {
        /// Backend name
        backend: &'static str,
        /// Requested trial count
        trial_count: BigUint,
        /// Backend maximum
        limit: u64,
    },

    /// Probability outside `[0, 1]`
    #[error("probability {0} outside [0, 1]")]
    InvalidProbability(f64),

    /// A split strategy broke the one-slot-per-value reservation
    #[error("split point {split} outside admissible window [{min}, {max}]")]
    SplitOutOfBounds {
        /// Returned split point
        split: BigUint,
        /// Smallest admissible split
        min: BigUint,
        /// Largest admissible split
        max: BigUint,
    },

    /// Range start beyond its end
    #[error("invalid range: from {from} > until {until}")]
    InvalidRange {
        /// Requested start
        from: BigUint,
        /// Requested end
        until: BigUint,
    },

    /// Uniform draw requested from an empty interval
    #[error("random bound must be positive")]
    InvalidBound,

    /// Name did not match any known variant
    #[error("unknown {category} '{name}'")]
    UnknownKind {
        /// Which kind enum was being parsed
        category: &'static str,
        /// Offending name
        name: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MonotonicError>;
