use std::collections::HashSet;

use blake3::Hasher;
use holorange::{HasherKind, Monotonic, MonotonicConfig, SamplerKind, TreeRandom};
use num_bigint::BigUint;

fn fingerprint(config: &MonotonicConfig) -> blake3::Hash {
    let monotonic = config.build().expect("valid config");
    let mut hasher = Hasher::new();
    let size = u64::try_from(monotonic.size()).unwrap();
    for i in 0..size {
        let value = monotonic.at(&BigUint::from(i)).unwrap();
        hasher.update(&value.to_bytes_be());
        hasher.update(b",");
    }
    hasher.finalize()
}

#[test]
fn independent_instances_agree() {
    for sampler in SamplerKind::ALL {
        for hasher in HasherKind::ALL {
            let config = MonotonicConfig::new(500u32, 37u32)
                .with_seed(0xDEAD_BEEF)
                .with_sampler(sampler)
                .with_hasher(hasher);

            let mut fingerprints = HashSet::new();
            for _ in 0..5 {
                fingerprints.insert(fingerprint(&config));
            }
            assert_eq!(fingerprints.len(), 1, "outputs diverged for {sampler}/{hasher}");
        }
    }
}

#[test]
fn seed_changes_the_function() {
    let base = MonotonicConfig::new(500u32, 37u32);
    let fingerprints: HashSet<_> = (0..8u64)
        .map(|seed| fingerprint(&base.clone().with_seed(seed)))
        .collect();
    assert!(fingerprints.len() > 1, "seed had no effect");
}

#[test]
fn query_order_does_not_matter() {
    let config = MonotonicConfig::new(300u32, 40u32).with_seed(17);
    let forward = config.build().unwrap();
    let backward = config.build().unwrap();

    let mut from_back: Vec<BigUint> = (0..300u32)
        .rev()
        .map(|i| backward.at(&BigUint::from(i)).unwrap())
        .collect();
    from_back.reverse();
    let from_front: Vec<BigUint> = (0..300u32)
        .map(|i| forward.at(&BigUint::from(i)).unwrap())
        .collect();
    assert_eq!(from_front, from_back);
}

#[test]
fn tree_random_children_replay_identically() {
    let root = TreeRandom::new(2718, HasherKind::Keyed);
    let key = BigUint::from(10u32).pow(50);
    let first: Vec<u64> = (0..16u32)
        .map(|k| root.sub(&key).sub(&BigUint::from(k)).next_u64())
        .collect();
    let second: Vec<u64> = (0..16u32)
        .map(|k| TreeRandom::new(2718, HasherKind::Keyed).sub(&key).sub(&BigUint::from(k)).next_u64())
        .collect();
    assert_eq!(first, second);
    assert_eq!(root.sub(&key).bytes(96), root.sub(&key).bytes(96));
}
