//! Closed-form proportional mapping: `at(i) = floor(i * image_size / size)`.

use num_bigint::BigUint;

use super::{check_index, check_sizes, check_value, Monotonic};
use crate::range::Range;
use crate::util::ceil_div;
use crate::Result;

/// Seedless baseline; O(1) big-integer operations per query, no recursion.
#[derive(Debug, Clone)]
pub struct LinearMonotonic {
    size: BigUint,
    image_size: BigUint,
}

impl LinearMonotonic {
    /// Build over `[0, size) -> [0, image_size)`.
    pub fn new(size: BigUint, image_size: BigUint) -> Result<Self> {
        check_sizes(&size, &image_size)?;
        Ok(Self { size, image_size })
    }

    fn first_index_of(&self, value: &BigUint) -> BigUint {
        ceil_div(&(value * &self.size), &self.image_size)
    }
}

impl Monotonic for LinearMonotonic {
    fn size(&self) -> &BigUint {
        &self.size
    }

    fn image_size(&self) -> &BigUint {
        &self.image_size
    }

    fn at(&self, index: &BigUint) -> Result<BigUint> {
        check_index(index, &self.size)?;
        Ok(index * &self.image_size / &self.size)
    }

    fn indices_of(&self, value: &BigUint) -> Result<Range> {
        check_value(value, &self.image_size)?;
        let from = self.first_index_of(value);
        let until = self.first_index_of(&(value + 1u32));
        Ok(Range::new_unchecked(from, until))
    }

    fn is_reversible(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_groups_are_proportional() {
        let m = LinearMonotonic::new(n(10), n(3)).unwrap();
        let values: Vec<BigUint> = (0..10).map(|i| m.at(&n(i)).unwrap()).collect();
        let expected: Vec<BigUint> = [0, 0, 0, 0, 1, 1, 1, 2, 2, 2].iter().map(|&v| n(v)).collect();
        assert_eq!(values, expected);
        assert_eq!(m.indices_of(&n(1)).unwrap(), Range::from_until(n(4), n(7)).unwrap());
        assert_eq!(m.indices_of(&n(2)).unwrap(), Range::from_until(n(7), n(10)).unwrap());
    }

    #[test]
    fn test_inverse_agrees_with_at() {
        let m = LinearMonotonic::new(n(97), n(13)).unwrap();
        for v in 0..13 {
            let range = m.indices_of(&n(v)).unwrap();
            assert!(!range.is_empty());
            let (from, until) = range.into_bounds();
            let mut i = from;
            while i < until {
                assert_eq!(m.at(&i).unwrap(), n(v));
                i += 1u32;
            }
        }
    }
}
