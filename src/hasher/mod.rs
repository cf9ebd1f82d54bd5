//! Stateless keyed hashing used to derive tree-random streams
//!
//! A hasher maps `(seed, message)` to a fixed 32-byte digest. It carries no
//! state, so two calls with equal inputs always agree, in any process.

mod fast;
mod keyed;

use std::fmt;
use std::str::FromStr;

pub use fast::FastHasher;
pub use keyed::KeyedHasher;

use crate::MonotonicError;

/// Length in bytes of every digest and tree-random seed.
pub const DIGEST_LEN: usize = 32;

/// Fixed-size hash output, also used as a tree-random node seed.
pub type Digest = [u8; DIGEST_LEN];

/// Pure keyed hash function.
pub trait Hasher: Send + Sync + fmt::Debug {
    /// Hash `message` under `seed`.
    fn hash(&self, seed: &Digest, message: &[u8]) -> Digest;
}

/// Hasher selection, chosen at construction time and carried by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HasherKind {
    /// BLAKE3 keyed mode (cryptographic strength)
    #[default]
    Keyed,
    /// Multiply/xor-shift mixer (fast, non-cryptographic)
    Fast,
}

impl HasherKind {
    /// All selectable hashers.
    pub const ALL: [HasherKind; 2] = [HasherKind::Keyed, HasherKind::Fast];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            HasherKind::Keyed => "keyed",
            HasherKind::Fast => "fast",
        }
    }
}

impl Hasher for HasherKind {
    fn hash(&self, seed: &Digest, message: &[u8]) -> Digest {
        match self {
            HasherKind::Keyed => KeyedHasher.hash(seed, message),
            HasherKind::Fast => FastHasher.hash(seed, message),
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HasherKind {
    type Err = MonotonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HasherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MonotonicError::UnknownKind {
                category: "hasher",
                name: s.to_string(),
            })
    }
}
