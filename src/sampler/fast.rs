use num_bigint::BigUint;

use super::Sampler;
use crate::util::scale_by_probability;

/// Always answers `floor(n * p)`; ignores the seed and has no size limit.
#[derive(Debug, Clone)]
pub struct FastSampler {
    value: BigUint,
}

impl FastSampler {
    /// Prepare a draw.
    pub fn new(trial_count: &BigUint, probability: f64) -> Self {
        Self {
            value: scale_by_probability(trial_count, probability),
        }
    }
}

impl Sampler for FastSampler {
    fn sample(&mut self) -> BigUint {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_expected_value() {
        let n = BigUint::from(1001u32);
        assert_eq!(FastSampler::new(&n, 0.5).sample(), BigUint::from(500u32));
        assert_eq!(FastSampler::new(&n, 0.25).sample(), BigUint::from(250u32));
    }
}
