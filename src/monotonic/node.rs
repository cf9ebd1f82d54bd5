//! Implicit recursion node
//!
//! Node = (domain range, image range, level). Children are computed from the
//! floor midpoint of the image range and a domain split point chosen by the
//! strategy; nothing is stored between queries except the split cache.

use std::fmt;

use num_bigint::BigUint;

use crate::range::Range;

/// One step of the recursive narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNode {
    /// Domain positions covered by this node
    pub domain: Range,
    /// Image values covered by this node
    pub image: Range,
    /// Depth below the root
    pub level: usize,
}

impl SplitNode {
    /// Root spanning the whole function.
    pub fn root(size: &BigUint, image_size: &BigUint) -> Self {
        Self {
            domain: Range::from_length(BigUint::default(), size.clone()),
            image: Range::from_length(BigUint::default(), image_size.clone()),
            level: 0,
        }
    }

    /// A node with a single image value is a leaf.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.image.size() == BigUint::from(1u32)
    }

    /// Floor midpoint of the image range.
    pub fn image_split(&self) -> BigUint {
        self.image.from() + (self.image.size() >> 1u32)
    }

    /// Left child: `[domain.from, domain_split)` onto `[image.from, image_split)`.
    pub fn left(self, domain_split: BigUint, image_split: BigUint) -> SplitNode {
        let (domain_from, _) = self.domain.into_bounds();
        let (image_from, _) = self.image.into_bounds();
        SplitNode {
            domain: Range::new_unchecked(domain_from, domain_split),
            image: Range::new_unchecked(image_from, image_split),
            level: self.level + 1,
        }
    }

    /// Right child: `[domain_split, domain.until)` onto `[image_split, image.until)`.
    pub fn right(self, domain_split: BigUint, image_split: BigUint) -> SplitNode {
        let (_, domain_until) = self.domain.into_bounds();
        let (_, image_until) = self.image.into_bounds();
        SplitNode {
            domain: Range::new_unchecked(domain_split, domain_until),
            image: Range::new_unchecked(image_split, image_until),
            level: self.level + 1,
        }
    }
}

impl fmt::Display for SplitNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} @{}", self.domain, self.image, self.level)
    }
}

/// Domain positions left after reserving one slot per image value on each side.
///
/// Every admissible domain split lies in `[flexible.from, flexible.until]`.
pub fn flexible_range(domain: &Range, image: &Range, image_split: &BigUint) -> Range {
    let left_count = image_split - image.from();
    let right_count = image.until() - image_split;
    Range::new_unchecked(domain.from() + left_count, domain.until() - right_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: u32, until: u32) -> Range {
        Range::from_until(BigUint::from(from), BigUint::from(until)).unwrap()
    }

    #[test]
    fn test_image_split_is_floor_midpoint() {
        let node = SplitNode {
            domain: range(0, 100),
            image: range(3, 8),
            level: 0,
        };
        assert_eq!(node.image_split(), BigUint::from(5u32));
    }

    #[test]
    fn test_children_partition_parent() {
        let node = SplitNode::root(&BigUint::from(10u32), &BigUint::from(4u32));
        let split = node.image_split();
        let left = node.clone().left(BigUint::from(6u32), split.clone());
        let right = node.right(BigUint::from(6u32), split);
        assert_eq!(left.domain, range(0, 6));
        assert_eq!(left.image, range(0, 2));
        assert_eq!(right.domain, range(6, 10));
        assert_eq!(right.image, range(2, 4));
        assert_eq!(left.level, 1);
    }

    #[test]
    fn test_flexible_range_reserves_both_sides() {
        let flexible = flexible_range(&range(10, 30), &range(0, 5), &BigUint::from(2u32));
        // two values reserved on the left, three on the right
        assert_eq!(flexible, range(12, 27));
    }
}
