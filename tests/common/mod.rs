#![allow(dead_code)]

use holorange::{Monotonic, MonotonicConfig, Range};
use num_bigint::BigUint;

pub fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

/// `at(i)` for every index of a small function.
pub fn values(monotonic: &dyn Monotonic) -> Vec<BigUint> {
    let size = u64::try_from(monotonic.size()).expect("enumerable size");
    (0..size)
        .map(|i| monotonic.at(&n(i)).expect("index in range"))
        .collect()
}

/// `indices_of(v)` for every value of a small function.
pub fn preimages(monotonic: &dyn Monotonic) -> Vec<Range> {
    let image_size = u64::try_from(monotonic.image_size()).expect("enumerable image");
    (0..image_size)
        .map(|v| monotonic.indices_of(&n(v)).expect("value in range"))
        .collect()
}

/// Checks monotonicity, surjectivity, inverse consistency and partition
/// completeness by full enumeration.
pub fn assert_monotonic_surjective(monotonic: &dyn Monotonic) {
    let values = values(monotonic);
    let preimages = preimages(monotonic);

    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "not monotonic: {} > {}", pair[0], pair[1]);
    }

    let mut expected_from = n(0);
    for (v, range) in preimages.iter().enumerate() {
        assert!(!range.is_empty(), "value {v} has no preimage");
        assert_eq!(range.from(), &expected_from, "gap or overlap before value {v}");
        expected_from = range.until().clone();

        let mut i = range.from().clone();
        while &i < range.until() {
            assert_eq!(values[usize::try_from(&i).unwrap()], n(v as u64));
            i += 1u32;
        }
    }
    assert_eq!(&expected_from, monotonic.size(), "preimages do not cover the domain");

    for (i, value) in values.iter().enumerate() {
        let range = &preimages[usize::try_from(value).unwrap()];
        assert!(range.contains(&n(i as u64)));
    }
}

pub fn build(config: &MonotonicConfig) -> Box<dyn Monotonic> {
    config.build().expect("valid config")
}
