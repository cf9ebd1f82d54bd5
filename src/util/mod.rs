//! Arbitrary-precision arithmetic helpers shared by the samplers and strategies

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Bits of fraction kept when scaling by a probability (f64 mantissa width).
const PROBABILITY_BITS: u32 = 53;

/// Approximate `numerator / denominator` as an `f64`.
///
/// Both operands are shifted down to 64 significant bits first, so arbitrarily
/// large values keep the precision of their leading bits instead of
/// overflowing to infinity.
pub fn ratio_to_f64(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if denominator.is_zero() {
        return f64::NAN;
    }
    let bits = numerator.bits().max(denominator.bits());
    let shift = bits.saturating_sub(64);
    let num = (numerator >> shift).to_f64().unwrap_or(f64::INFINITY);
    let den = (denominator >> shift).to_f64().unwrap_or(f64::INFINITY);
    if den == 0.0 {
        // Denominator vanished under the shift; it is tiny relative to the numerator.
        return f64::INFINITY;
    }
    num / den
}

/// Compute `floor(value * probability)` exactly for `probability` in `[0, 1]`.
///
/// The probability is quantized to 53 fractional bits, which is exact for
/// every finite `f64` in range.
pub fn scale_by_probability(value: &BigUint, probability: f64) -> BigUint {
    if probability <= 0.0 {
        return BigUint::zero();
    }
    if probability >= 1.0 {
        return value.clone();
    }
    let scale = (probability * (1u64 << PROBABILITY_BITS) as f64).floor() as u64;
    (value * BigUint::from(scale)) >> PROBABILITY_BITS
}

/// Ceiling division for non-negative operands. `divisor` must be non-zero.
pub fn ceil_div(dividend: &BigUint, divisor: &BigUint) -> BigUint {
    debug_assert!(!divisor.is_zero(), "ceil_div by zero");
    (dividend + divisor - 1u32) / divisor
}
