//! Canonical byte encoding of tree-random messages
//!
//! Child keys encode as a sign tag plus the minimal big-endian magnitude
//! (zero has an empty magnitude), so no two distinct integers share an
//! encoding. Output blocks use their own tag and can never collide with a key.

use num_bigint::{BigInt, BigUint, Sign};

const TAG_NON_NEGATIVE: u8 = 0x00;
const TAG_NEGATIVE: u8 = 0x01;
const TAG_OUTPUT_BLOCK: u8 = 0xFF;

fn minimal_be(magnitude: &BigUint) -> Vec<u8> {
    if magnitude.bits() == 0 {
        Vec::new()
    } else {
        magnitude.to_bytes_be()
    }
}

/// Encode a non-negative child key.
pub fn encode_unsigned_key(key: &BigUint) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + (key.bits() as usize + 7) / 8);
    out.push(TAG_NON_NEGATIVE);
    out.extend(minimal_be(key));
    out
}

/// Encode a signed child key. Non-negative values encode exactly like
/// [`encode_unsigned_key`].
pub fn encode_signed_key(key: &BigInt) -> Vec<u8> {
    let tag = match key.sign() {
        Sign::Minus => TAG_NEGATIVE,
        Sign::NoSign | Sign::Plus => TAG_NON_NEGATIVE,
    };
    let mut out = vec![tag];
    out.extend(minimal_be(key.magnitude()));
    out
}

/// Encode the index of an output block.
pub fn encode_output_block(block: u64) -> [u8; 9] {
    let mut out = [0u8; 9];
    out[0] = TAG_OUTPUT_BLOCK;
    out[1..].copy_from_slice(&block.to_be_bytes());
    out
}
