//! Property tests over randomly chosen sizes, seeds and backends

mod common;

use common::assert_monotonic_surjective;
use holorange::{HasherKind, Monotonic, MonotonicConfig, SamplerKind, StrategyKind};
use proptest::prelude::*;

fn samplers() -> impl Strategy<Value = SamplerKind> {
    prop_oneof![
        Just(SamplerKind::Binomial),
        Just(SamplerKind::Normal),
        Just(SamplerKind::Fast),
    ]
}

fn hashers() -> impl Strategy<Value = HasherKind> {
    prop_oneof![Just(HasherKind::Keyed), Just(HasherKind::Fast)]
}

fn strategies() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Surjective),
        Just(StrategyKind::Fast),
        Just(StrategyKind::Linear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_configuration_is_monotonic_and_surjective(
        (size, image_size) in (1u64..300).prop_flat_map(|size| (Just(size), 1..=size)),
        seed in any::<u64>(),
        cache_depth in 0usize..6,
        sampler_max_length in 1u64..400,
        sampler in samplers(),
        hasher in hashers(),
        strategy in strategies(),
    ) {
        let config = MonotonicConfig::new(size, image_size)
            .with_seed(seed)
            .with_cache_depth(cache_depth)
            .with_sampler_max_length(sampler_max_length)
            .with_sampler(sampler)
            .with_hasher(hasher)
            .with_strategy(strategy);
        let monotonic = config.build().expect("valid config");
        assert_monotonic_surjective(monotonic.as_ref());
    }

    #[test]
    fn cache_depth_never_changes_answers(
        (size, image_size) in (2u64..200).prop_flat_map(|size| (Just(size), 1..=size)),
        seed in any::<u64>(),
        index_seed in any::<u64>(),
    ) {
        let uncached = MonotonicConfig::new(size, image_size).with_seed(seed).with_cache_depth(0);
        let cached = uncached.clone().with_cache_depth(32);
        let a = uncached.build().expect("valid config");
        let b = cached.build().expect("valid config");

        let index = num_bigint::BigUint::from(index_seed % size);
        prop_assert_eq!(a.at(&index).unwrap(), b.at(&index).unwrap());
        let value = a.at(&index).unwrap();
        prop_assert_eq!(a.indices_of(&value).unwrap(), b.indices_of(&value).unwrap());
    }
}
