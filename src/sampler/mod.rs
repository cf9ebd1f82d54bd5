//! Seeded count samplers
//!
//! A sampler draws how many of `trial_count` trials succeed with a given
//! probability. The split strategies use the draw to decide how much surplus
//! domain capacity goes to the left half of an image range. Every backend is
//! a pure function of `(seed, trial_count, probability)`.

mod binomial;
mod fast;
mod normal;

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

pub use binomial::BinomialSampler;
pub use fast::FastSampler;
pub use normal::NormalSampler;

use crate::{MonotonicError, Result};

/// A single prepared draw.
pub trait Sampler: Send {
    /// Draw a count in `[0, trial_count]`.
    fn sample(&mut self) -> BigUint;
}

/// Builds samplers; the only interface a numeric backend has to satisfy.
pub trait SamplerFactory: Send + Sync + fmt::Debug {
    /// Prepare a sampler for Binomial(`trial_count`, `probability`) seeded by `seed`.
    fn create(
        &self,
        seed: u64,
        trial_count: &BigUint,
        probability: f64,
    ) -> Result<Box<dyn Sampler>>;

    /// Largest trial count the backend accepts, if bounded.
    fn max_trial_count(&self) -> Option<BigUint>;
}

/// Sampler backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SamplerKind {
    /// Exact binomial draw
    #[default]
    Binomial,
    /// Normal approximation of the binomial
    Normal,
    /// Expected value, no randomness
    Fast,
}

impl SamplerKind {
    /// All selectable backends.
    pub const ALL: [SamplerKind; 3] = [SamplerKind::Binomial, SamplerKind::Normal, SamplerKind::Fast];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            SamplerKind::Binomial => "binomial",
            SamplerKind::Normal => "normal",
            SamplerKind::Fast => "fast",
        }
    }
}

impl SamplerFactory for SamplerKind {
    fn create(
        &self,
        seed: u64,
        trial_count: &BigUint,
        probability: f64,
    ) -> Result<Box<dyn Sampler>> {
        check_probability(probability)?;
        match self {
            SamplerKind::Binomial => Ok(Box::new(BinomialSampler::new(seed, trial_count, probability)?)),
            SamplerKind::Normal => Ok(Box::new(NormalSampler::new(seed, trial_count, probability)?)),
            SamplerKind::Fast => Ok(Box::new(FastSampler::new(trial_count, probability))),
        }
    }

    fn max_trial_count(&self) -> Option<BigUint> {
        match self {
            SamplerKind::Binomial => Some(BigUint::from(BinomialSampler::MAX_TRIAL_COUNT)),
            SamplerKind::Normal => Some(BigUint::from(NormalSampler::MAX_TRIAL_COUNT)),
            SamplerKind::Fast => None,
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplerKind {
    type Err = MonotonicError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SamplerKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MonotonicError::UnknownKind {
                category: "sampler",
                name: s.to_string(),
            })
    }
}

/// Reject a sampling threshold the backend could not serve.
///
/// Flexible ranges up to `sampler_max_length` are handed to the factory as
/// trial counts, so a threshold above the backend limit would only fail
/// partway through a query.
pub(crate) fn check_sampler_max_length<F: SamplerFactory + ?Sized>(
    factory: &F,
    sampler_max_length: &BigUint,
) -> Result<()> {
    if sampler_max_length.bits() == 0 {
        return Err(MonotonicError::InvalidConfiguration(
            "sampler max length must be > 0".to_string(),
        ));
    }
    match factory.max_trial_count() {
        Some(limit) if sampler_max_length > &limit => Err(MonotonicError::InvalidConfiguration(
            format!("sampler max length {sampler_max_length} exceeds backend limit {limit}"),
        )),
        _ => Ok(()),
    }
}

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(MonotonicError::InvalidProbability(probability))
    }
}

fn check_trial_count(backend: &'static str, trial_count: &BigUint, limit: u64) -> Result<u64> {
    match u64::try_from(trial_count) {
        Ok(n) if n <= limit => Ok(n),
        _ => Err(MonotonicError::TrialCountTooLarge {
            backend,
            trial_count: trial_count.clone(),
            limit,
        }),
    }
}
