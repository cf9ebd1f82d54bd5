use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Binomial, Distribution};

use super::{check_trial_count, Sampler};
use crate::{MonotonicError, Result};

/// Exact Binomial(n, p) draw from a ChaCha stream seeded by the caller.
#[derive(Debug, Clone)]
pub struct BinomialSampler {
    rng: ChaCha8Rng,
    distribution: Binomial,
}

impl BinomialSampler {
    /// Trial counts must fit the backend's `u64` parameter.
    pub const MAX_TRIAL_COUNT: u64 = u64::MAX;

    /// Prepare a draw.
    pub fn new(seed: u64, trial_count: &BigUint, probability: f64) -> Result<Self> {
        let n = check_trial_count("binomial", trial_count, Self::MAX_TRIAL_COUNT)?;
        let distribution = Binomial::new(n, probability)
            .map_err(|_| MonotonicError::InvalidProbability(probability))?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            distribution,
        })
    }
}

impl Sampler for BinomialSampler {
    fn sample(&mut self) -> BigUint {
        BigUint::from(self.distribution.sample(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_tracks_probability() {
        let n = BigUint::from(1000u32);
        let total: u64 = (0..200u64)
            .map(|seed| {
                let draw = BinomialSampler::new(seed, &n, 0.25).unwrap().sample();
                u64::try_from(&draw).unwrap()
            })
            .sum();
        let mean = total as f64 / 200.0;
        assert!((mean - 250.0).abs() < 10.0, "mean {mean} too far from 250");
    }

    #[test]
    fn degenerate_probabilities() {
        let n = BigUint::from(37u32);
        assert_eq!(BinomialSampler::new(1, &n, 0.0).unwrap().sample(), BigUint::from(0u32));
        assert_eq!(BinomialSampler::new(1, &n, 1.0).unwrap().sample(), n);
    }
}
