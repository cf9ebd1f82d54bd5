//! Generic recursive engine with bounded-depth split caching
//!
//! Queries walk from the root node down to a single image value. At every
//! node the image range is cut at its floor midpoint and the strategy picks
//! the matching domain cut. The walk is a loop; only the current node is
//! held, and split points for the top levels are memoized in [`SplitCache`].

use std::fmt;

use num_bigint::BigUint;
use tracing::{debug, trace};

use super::node::{flexible_range, SplitNode};
use super::{check_index, check_sizes, check_value, Monotonic, SplitCache};
use crate::range::Range;
use crate::{MonotonicError, Result};

/// Chooses the domain split point of a recursion node.
///
/// Implementations must return a point in
/// `[flexible.from, flexible.until]` (see [`flexible_range`]) and must be a
/// pure function of their inputs.
pub trait SplitStrategy: Send + Sync + fmt::Debug {
    /// Domain split for the node `(domain, image, level)` whose image is cut at `image_split`.
    fn split(
        &self,
        domain: &Range,
        image: &Range,
        image_split: &BigUint,
        level: usize,
    ) -> Result<BigUint>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Monotonic function built lazily by recursive binary splitting.
#[derive(Debug)]
pub struct CachingRecursiveMonotonic<S: SplitStrategy> {
    size: BigUint,
    image_size: BigUint,
    cache: SplitCache,
    strategy: S,
}

impl<S: SplitStrategy> CachingRecursiveMonotonic<S> {
    /// Build over `[0, size) -> [0, image_size)` with the given strategy.
    pub fn with_strategy(
        size: BigUint,
        image_size: BigUint,
        cache_depth: usize,
        strategy: S,
    ) -> Result<Self> {
        check_sizes(&size, &image_size)?;
        debug!(
            size = %size,
            image_size = %image_size,
            cache_depth,
            strategy = strategy.name(),
            "constructed recursive monotonic"
        );
        Ok(Self {
            size,
            image_size,
            cache: SplitCache::new(cache_depth),
            strategy,
        })
    }

    /// Split strategy in use.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of memoized recursion levels.
    pub fn cache_depth(&self) -> usize {
        self.cache.depth()
    }

    /// Number of split points memoized so far.
    pub fn split_cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Domain split of the root node, or `None` when the image has one value.
    pub fn root_split(&self) -> Result<Option<BigUint>> {
        let root = SplitNode::root(&self.size, &self.image_size);
        if root.is_terminal() {
            return Ok(None);
        }
        let image_split = root.image_split();
        self.domain_split(&root, &image_split).map(Some)
    }

    fn domain_split(&self, node: &SplitNode, image_split: &BigUint) -> Result<BigUint> {
        if let Some(split) = self.cache.get(node.level, image_split) {
            trace!(level = node.level, image_split = %image_split, "split cache hit");
            return Ok(split);
        }

        let split = self
            .strategy
            .split(&node.domain, &node.image, image_split, node.level)?;

        let window = flexible_range(&node.domain, &node.image, image_split);
        if &split < window.from() || &split > window.until() {
            return Err(MonotonicError::SplitOutOfBounds {
                split,
                min: window.from().clone(),
                max: window.until().clone(),
            });
        }

        trace!(node = %node, domain_split = %split, "computed split");
        self.cache.insert(node.level, image_split.clone(), split.clone());
        Ok(split)
    }

    /// Walk from the root to a terminal node; `goes_left(domain_split, image_split)`
    /// decides the direction at each step.
    fn descend<F>(&self, goes_left: F) -> Result<SplitNode>
    where
        F: Fn(&BigUint, &BigUint) -> bool,
    {
        let mut node = SplitNode::root(&self.size, &self.image_size);
        while !node.is_terminal() {
            let image_split = node.image_split();
            let domain_split = self.domain_split(&node, &image_split)?;
            node = if goes_left(&domain_split, &image_split) {
                node.left(domain_split, image_split)
            } else {
                node.right(domain_split, image_split)
            };
        }
        Ok(node)
    }
}

impl<S: SplitStrategy> Monotonic for CachingRecursiveMonotonic<S> {
    fn size(&self) -> &BigUint {
        &self.size
    }

    fn image_size(&self) -> &BigUint {
        &self.image_size
    }

    fn at(&self, index: &BigUint) -> Result<BigUint> {
        check_index(index, &self.size)?;
        let leaf = self.descend(|domain_split, _| index < domain_split)?;
        let (value, _) = leaf.image.into_bounds();
        Ok(value)
    }

    fn indices_of(&self, value: &BigUint) -> Result<Range> {
        check_value(value, &self.image_size)?;
        let leaf = self.descend(|_, image_split| value < image_split)?;
        Ok(leaf.domain)
    }

    fn is_reversible(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Puts every surplus slot on the far right.
    #[derive(Debug)]
    struct LeftmostSplit;

    impl SplitStrategy for LeftmostSplit {
        fn split(&self, domain: &Range, image: &Range, image_split: &BigUint, _: usize) -> Result<BigUint> {
            Ok(flexible_range(domain, image, image_split).from().clone())
        }

        fn name(&self) -> &'static str {
            "leftmost"
        }
    }

    /// Ignores the reservation.
    #[derive(Debug)]
    struct BrokenSplit;

    impl SplitStrategy for BrokenSplit {
        fn split(&self, domain: &Range, _: &Range, _: &BigUint, _: usize) -> Result<BigUint> {
            Ok(domain.from().clone())
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_leftmost_strategy_packs_surplus_into_last_value() {
        let m = CachingRecursiveMonotonic::with_strategy(n(10), n(4), 4, LeftmostSplit).unwrap();
        let values: Vec<BigUint> = (0..10).map(|i| m.at(&n(i)).unwrap()).collect();
        let expected: Vec<BigUint> = [0, 1, 2, 3, 3, 3, 3, 3, 3, 3].iter().map(|&v| n(v)).collect();
        assert_eq!(values, expected);
        assert_eq!(m.indices_of(&n(3)).unwrap(), Range::from_until(n(3), n(10)).unwrap());
    }

    #[test]
    fn test_out_of_window_split_is_rejected() {
        let m = CachingRecursiveMonotonic::with_strategy(n(10), n(4), 4, BrokenSplit).unwrap();
        assert!(matches!(
            m.at(&n(0)),
            Err(MonotonicError::SplitOutOfBounds { .. })
        ));
        assert_eq!(m.split_cache_len(), 0);
    }

    #[test]
    fn test_construction_validates_sizes() {
        assert!(matches!(
            CachingRecursiveMonotonic::with_strategy(n(3), n(4), 0, LeftmostSplit),
            Err(MonotonicError::ImageExceedsSize { .. })
        ));
        assert!(matches!(
            CachingRecursiveMonotonic::with_strategy(n(3), n(0), 0, LeftmostSplit),
            Err(MonotonicError::EmptyImage)
        ));
    }

    #[test]
    fn test_out_of_range_queries() {
        let m = CachingRecursiveMonotonic::with_strategy(n(10), n(4), 4, LeftmostSplit).unwrap();
        assert!(matches!(
            m.at(&n(10)),
            Err(MonotonicError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            m.indices_of(&n(4)),
            Err(MonotonicError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_cache_fills_only_top_levels() {
        let m = CachingRecursiveMonotonic::with_strategy(n(64), n(16), 2, LeftmostSplit).unwrap();
        for i in 0..64 {
            m.at(&n(i)).unwrap();
        }
        // level 0 has one node, level 1 has two
        assert_eq!(m.split_cache_len(), 3);
    }

    #[test]
    fn test_root_split_none_for_single_value() {
        let m = CachingRecursiveMonotonic::with_strategy(n(8), n(1), 2, LeftmostSplit).unwrap();
        assert_eq!(m.root_split().unwrap(), None);
    }
}
