//! Bounded-depth memo of domain split points
//!
//! One map per cached level, keyed by the image split point (which is unique
//! to its node). Levels at or beyond the depth are never stored, so memory is
//! bounded by the number of distinct nodes in the top `depth` levels.

use std::collections::HashMap;
use std::fmt;

use num_bigint::BigUint;
use parking_lot::RwLock;

/// Concurrent split cache shared by every query on one monotonic instance.
///
/// Two threads filling the same slot compute the same value, so a racing
/// overwrite is harmless.
pub struct SplitCache {
    levels: Box<[RwLock<HashMap<BigUint, BigUint>>]>,
}

impl SplitCache {
    /// Cache for the top `depth` recursion levels.
    pub fn new(depth: usize) -> Self {
        Self {
            levels: (0..depth).map(|_| RwLock::new(HashMap::new())).collect(),
        }
    }

    /// Number of cached levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Cached split for the node at `level` with `image_split`.
    pub fn get(&self, level: usize, image_split: &BigUint) -> Option<BigUint> {
        self.levels.get(level)?.read().get(image_split).cloned()
    }

    /// Store a split; ignored below the cached depth.
    pub fn insert(&self, level: usize, image_split: BigUint, domain_split: BigUint) {
        if let Some(slot) = self.levels.get(level) {
            slot.write().insert(image_split, domain_split);
        }
    }

    /// Total number of cached splits.
    pub fn len(&self) -> usize {
        self.levels.iter().map(|level| level.read().len()).sum()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SplitCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitCache")
            .field("depth", &self.depth())
            .field("entries", &self.len())
            .finish()
    }
}
