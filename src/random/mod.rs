//! Path-addressable, seeded pseudorandom streams
//!
//! A [`TreeRandom`] node is nothing but a 32-byte seed and a hasher choice.
//! Children are derived by hashing a canonically encoded key under the
//! parent seed, so any node of an unbounded recursion tree can be recreated
//! from the root seed and its key path alone, without storing anything.

mod encoding;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

pub use encoding::{encode_output_block, encode_signed_key, encode_unsigned_key};

use crate::hasher::{Digest, Hasher, HasherKind, DIGEST_LEN};
use crate::{MonotonicError, Result};

/// Immutable tree-random node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeRandom {
    seed: Digest,
    hasher: HasherKind,
}

impl TreeRandom {
    /// Root node for a numeric seed.
    pub fn new(seed: u64, hasher: HasherKind) -> Self {
        let root = hasher.hash(&[0u8; DIGEST_LEN], &seed.to_be_bytes());
        Self::from_seed_bytes(root, hasher)
    }

    /// Node with an explicit 32-byte seed.
    pub fn from_seed_bytes(seed: Digest, hasher: HasherKind) -> Self {
        Self { seed, hasher }
    }

    /// The node seed.
    pub fn seed(&self) -> &Digest {
        &self.seed
    }

    /// Hasher in use by this node and all of its descendants.
    pub fn hasher(&self) -> HasherKind {
        self.hasher
    }

    /// Derive the child stream addressed by `key`.
    pub fn sub(&self, key: &BigUint) -> TreeRandom {
        self.child(&encode_unsigned_key(key))
    }

    /// Derive the child stream addressed by a signed `key`.
    ///
    /// Agrees with [`TreeRandom::sub`] for non-negative keys.
    pub fn sub_signed(&self, key: &BigInt) -> TreeRandom {
        self.child(&encode_signed_key(key))
    }

    /// Derive a child by following `path` from this node.
    pub fn sub_path<'a, I>(&self, path: I) -> TreeRandom
    where
        I: IntoIterator<Item = &'a BigUint>,
    {
        path.into_iter()
            .fold(self.clone(), |node, key| node.sub(key))
    }

    fn child(&self, message: &[u8]) -> TreeRandom {
        TreeRandom {
            seed: self.hasher.hash(&self.seed, message),
            hasher: self.hasher,
        }
    }

    fn output_block(&self, block: u64) -> Digest {
        self.hasher.hash(&self.seed, &encode_output_block(block))
    }

    /// First `len` bytes of this node's output stream.
    pub fn bytes(&self, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        let mut block = 0u64;
        while out.len() < len {
            let digest = self.output_block(block);
            let take = (len - out.len()).min(DIGEST_LEN);
            out.extend_from_slice(&digest[..take]);
            block += 1;
        }
        out
    }

    /// First 8 output bytes as an unsigned integer.
    pub fn next_u64(&self) -> u64 {
        let digest = self.output_block(0);
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(word)
    }

    /// First 8 output bytes as a signed integer.
    pub fn next_long(&self) -> i64 {
        self.next_u64() as i64
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Draws `bits(bound - 1)`-bit candidates from consecutive windows of this
    /// node's own output stream (the one [`TreeRandom::bytes`] reads) and
    /// rejects those at or above `bound`. Each candidate is accepted with
    /// probability above one half.
    pub fn next_integer(&self, bound: &BigUint) -> Result<BigUint> {
        if bound.is_zero() {
            return Err(MonotonicError::InvalidBound);
        }
        let max = bound - 1u32;
        let bits = max.bits();
        if bits == 0 {
            return Ok(BigUint::zero());
        }
        let byte_len = ((bits + 7) / 8) as usize;
        let excess_bits = byte_len as u64 * 8 - bits;

        // Attempt k reads bytes [k * byte_len, (k + 1) * byte_len) of this node's stream.
        let mut stream = Vec::with_capacity(byte_len + DIGEST_LEN);
        let mut block = 0u64;
        loop {
            while stream.len() < byte_len {
                stream.extend_from_slice(&self.output_block(block));
                block += 1;
            }
            let window: Vec<u8> = stream.drain(..byte_len).collect();
            let candidate = BigUint::from_bytes_be(&window) >> excess_bits;
            if &candidate < bound {
                return Ok(candidate);
            }
        }
    }
}
