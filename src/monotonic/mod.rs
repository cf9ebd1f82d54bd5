//! Monotonic surjective step functions
//!
//! A [`Monotonic`] maps domain positions `[0, size)` onto image values
//! `[0, image_size)` without ever materializing the mapping. It is
//! non-decreasing, hits every image value at least once, and can be queried
//! in both directions: `at(index)` gives the value, `indices_of(value)` gives
//! the contiguous block of indices that map to it.
//!
//! Implementations:
//! - [`SurjectiveMonotonic`]: recursive binary splitting with sampler-shaped
//!   group sizes (the default)
//! - [`FastMonotonic`]: the same recursion with plain halving
//! - [`LinearMonotonic`]: closed-form proportional mapping

mod cache;
mod fast;
mod linear;
mod node;
mod recursive;
mod surjective;

use std::fmt;

use num_bigint::BigUint;

pub use cache::SplitCache;
pub use fast::{FastMonotonic, FastSplit};
pub use linear::LinearMonotonic;
pub use node::{flexible_range, SplitNode};
pub use recursive::{CachingRecursiveMonotonic, SplitStrategy};
pub use surjective::{SurjectiveMonotonic, SurjectiveSplit};

use crate::range::Range;
use crate::{MonotonicError, Result};

/// Default number of recursion levels whose split points are memoized.
pub const DEFAULT_CACHE_DEPTH: usize = 10;

/// Default largest flexible range length handed to a sampler.
pub const DEFAULT_SAMPLER_MAX_LENGTH: u64 = 1000;

/// Read-only monotonic surjective function over arbitrary-precision positions.
pub trait Monotonic: Send + Sync + fmt::Debug {
    /// Domain length.
    fn size(&self) -> &BigUint;

    /// Image length.
    fn image_size(&self) -> &BigUint;

    /// Value at `index`; fails if `index >= size`.
    fn at(&self, index: &BigUint) -> Result<BigUint>;

    /// Indices mapping to `value`; fails if `value >= image_size`.
    fn indices_of(&self, value: &BigUint) -> Result<Range>;

    /// Whether `indices_of` is supported.
    fn is_reversible(&self) -> bool;
}

impl<M: Monotonic + ?Sized> Monotonic for Box<M> {
    fn size(&self) -> &BigUint {
        (**self).size()
    }

    fn image_size(&self) -> &BigUint {
        (**self).image_size()
    }

    fn at(&self, index: &BigUint) -> Result<BigUint> {
        (**self).at(index)
    }

    fn indices_of(&self, value: &BigUint) -> Result<Range> {
        (**self).indices_of(value)
    }

    fn is_reversible(&self) -> bool {
        (**self).is_reversible()
    }
}

/// Validate construction sizes: `size >= image_size >= 1`.
pub(crate) fn check_sizes(size: &BigUint, image_size: &BigUint) -> Result<()> {
    if image_size.bits() == 0 {
        return Err(MonotonicError::EmptyImage);
    }
    if size < image_size {
        return Err(MonotonicError::ImageExceedsSize {
            size: size.clone(),
            image_size: image_size.clone(),
        });
    }
    Ok(())
}

pub(crate) fn check_index(index: &BigUint, size: &BigUint) -> Result<()> {
    if index >= size {
        return Err(MonotonicError::IndexOutOfRange {
            index: index.clone(),
            size: size.clone(),
        });
    }
    Ok(())
}

pub(crate) fn check_value(value: &BigUint, image_size: &BigUint) -> Result<()> {
    if value >= image_size {
        return Err(MonotonicError::ValueOutOfRange {
            value: value.clone(),
            image_size: image_size.clone(),
        });
    }
    Ok(())
}
