//! Half-open arbitrary-precision interval `[from, until)`
//!
//! Used both for domain positions (indices) and image positions (values).

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{MonotonicError, Result};

/// Immutable half-open interval over non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    from: BigUint,
    until: BigUint,
}

impl Range {
    /// Create `[from, until)`; fails if `from > until`.
    pub fn from_until(from: BigUint, until: BigUint) -> Result<Self> {
        if from > until {
            return Err(MonotonicError::InvalidRange { from, until });
        }
        Ok(Self { from, until })
    }

    /// Create `[from, from + length)`.
    pub fn from_length(from: BigUint, length: BigUint) -> Self {
        let until = &from + length;
        Self { from, until }
    }

    /// The empty range positioned at zero.
    pub fn empty() -> Self {
        Self {
            from: BigUint::zero(),
            until: BigUint::zero(),
        }
    }

    /// Build without the ordering check. Callers guarantee `from <= until`.
    pub(crate) fn new_unchecked(from: BigUint, until: BigUint) -> Self {
        debug_assert!(from <= until, "range start {from} beyond end {until}");
        Self { from, until }
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn from(&self) -> &BigUint {
        &self.from
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn until(&self) -> &BigUint {
        &self.until
    }

    /// Number of positions covered.
    pub fn size(&self) -> BigUint {
        &self.until - &self.from
    }

    /// True when the range covers nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.until
    }

    /// True when `position` lies in `[from, until)`.
    pub fn contains(&self, position: &BigUint) -> bool {
        &self.from <= position && position < &self.until
    }

    /// Overlap of two ranges. Disjoint ranges intersect to an empty range
    /// anchored at the larger start.
    pub fn intersect(&self, other: &Range) -> Range {
        let from = (&self.from).max(&other.from).clone();
        let until = (&self.until).min(&other.until).clone();
        if until < from {
            Range {
                until: from.clone(),
                from,
            }
        } else {
            Range { from, until }
        }
    }

    /// Destructure into `(from, until)`.
    pub fn into_bounds(self) -> (BigUint, BigUint) {
        (self.from, self.until)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(from: u32, until: u32) -> Range {
        Range::from_until(BigUint::from(from), BigUint::from(until)).unwrap()
    }

    #[test]
    fn test_size_and_emptiness() {
        assert_eq!(r(3, 10).size(), BigUint::from(7u32));
        assert!(r(4, 4).is_empty());
        assert!(!r(4, 5).is_empty());
        assert!(Range::empty().is_empty());
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let err = Range::from_until(BigUint::from(5u32), BigUint::from(2u32)).unwrap_err();
        assert!(matches!(err, MonotonicError::InvalidRange { .. }));
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = r(2, 5);
        assert!(!range.contains(&BigUint::from(1u32)));
        assert!(range.contains(&BigUint::from(2u32)));
        assert!(range.contains(&BigUint::from(4u32)));
        assert!(!range.contains(&BigUint::from(5u32)));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(r(0, 10).intersect(&r(5, 20)), r(5, 10));
        assert_eq!(r(0, 10).intersect(&r(2, 3)), r(2, 3));
        let disjoint = r(0, 3).intersect(&r(7, 9));
        assert!(disjoint.is_empty());
        assert_eq!(disjoint.from(), &BigUint::from(7u32));
    }

    #[test]
    fn test_from_length_and_display() {
        let range = Range::from_length(BigUint::from(10u32), BigUint::from(5u32));
        assert_eq!(range, r(10, 15));
        assert_eq!(range.to_string(), "[10, 15)");
    }
}
