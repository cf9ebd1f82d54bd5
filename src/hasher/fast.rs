use super::{Digest, Hasher, DIGEST_LEN};

const LANES: usize = DIGEST_LEN / 8;

/// Prime multiplier for absorbing message words.
const MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

/// Non-cryptographic four-lane mixer.
///
/// Message words are absorbed round-robin into lanes seeded from the key,
/// the length is folded in, and two cross-lane finalization rounds spread
/// every input bit over the whole digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastHasher;

#[inline]
fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

impl Hasher for FastHasher {
    fn hash(&self, seed: &Digest, message: &[u8]) -> Digest {
        let mut lanes = [0u64; LANES];
        for (lane, chunk) in lanes.iter_mut().zip(seed.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane = u64::from_be_bytes(word);
        }

        for (i, chunk) in message.chunks(8).enumerate() {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            let lane = &mut lanes[i % LANES];
            *lane = (*lane ^ u64::from_be_bytes(word)).wrapping_mul(MULTIPLIER);
            *lane = lane.rotate_left(29) ^ (i as u64);
        }

        let length = message.len() as u64;
        for (k, lane) in lanes.iter_mut().enumerate() {
            *lane ^= length.rotate_left(16 * k as u32);
        }

        for _ in 0..2 {
            for k in 0..LANES {
                let neighbour = lanes[(k + LANES - 1) % LANES];
                lanes[k] = fmix64(lanes[k] ^ neighbour.rotate_left(23));
            }
        }

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(lanes) {
            chunk.copy_from_slice(&lane.to_be_bytes());
        }
        out
    }
}
