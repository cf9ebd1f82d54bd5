use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use super::{check_trial_count, Sampler};
use crate::Result;

/// Normal approximation of Binomial(n, p), rounded and clamped to `[0, n]`.
///
/// Cheaper than an exact draw for large `n`; shape is poor when `n * p` is small.
#[derive(Debug, Clone)]
pub struct NormalSampler {
    rng: ChaCha8Rng,
    trials: u64,
    mean: f64,
    std_dev: f64,
}

impl NormalSampler {
    /// Integers above 2^53 are not exact in `f64`.
    pub const MAX_TRIAL_COUNT: u64 = 1 << 53;

    /// Prepare a draw.
    pub fn new(seed: u64, trial_count: &BigUint, probability: f64) -> Result<Self> {
        let trials = check_trial_count("normal", trial_count, Self::MAX_TRIAL_COUNT)?;
        let n = trials as f64;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            trials,
            mean: n * probability,
            std_dev: (n * probability * (1.0 - probability)).sqrt(),
        })
    }
}

impl Sampler for NormalSampler {
    fn sample(&mut self) -> BigUint {
        let z: f64 = self.rng.sample(StandardNormal);
        let value = (self.mean + self.std_dev * z).round();
        let clamped = value.clamp(0.0, self.trials as f64) as u64;
        BigUint::from(clamped.min(self.trials))
    }
}
