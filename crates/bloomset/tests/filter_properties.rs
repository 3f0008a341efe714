use bloomset::BloomFilter;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Anything inserted is always found afterwards, whatever the bytes.
    #[test]
    fn no_false_negatives(elements in vec(vec(any::<u8>(), 0..64), 1..50)) {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();

        for element in &elements {
            filter.insert(element);
        }
        for element in &elements {
            prop_assert!(filter.contains(element));
        }
    }

    /// Probing twice with no intervening insert gives the same answer.
    #[test]
    fn probes_are_deterministic(element in vec(any::<u8>(), 0..64)) {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        filter.insert(b"background noise");

        prop_assert_eq!(filter.contains(&element), filter.contains(&element));
    }

    /// Re-inserting an element changes nothing observable. The second insert
    /// can only re-set bits the first already set, so an unchanged
    /// population count means an unchanged bit pattern.
    #[test]
    fn insert_is_idempotent(element in vec(any::<u8>(), 0..64)) {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();

        filter.insert(&element);
        let bits_after_first = filter.bits_set();

        filter.insert(&element);

        prop_assert_eq!(filter.bits_set(), bits_after_first);
        prop_assert!(filter.contains(&element));
    }

    /// A clone probes identically to the original.
    #[test]
    fn clones_agree(elements in vec(vec(any::<u8>(), 0..32), 1..20)) {
        let mut filter = BloomFilter::new(500, 0.02).unwrap();
        for element in &elements {
            filter.insert(element);
        }

        let clone = filter.clone();
        for element in &elements {
            prop_assert_eq!(filter.contains(element), clone.contains(element));
        }
    }
}

/// Fill a filter to its designed capacity, then probe fresh keys that were
/// never inserted; the observed false positive rate must sit near the
/// configured target. Statistical, so the bound carries tolerance and the
/// generator is seeded.
#[test]
fn observed_false_positive_rate_tracks_target() {
    const ITEMS: usize = 10_000;
    const TARGET: f64 = 0.01;

    let mut rng = StdRng::seed_from_u64(0x626c_6f6f);
    let mut filter = BloomFilter::new(ITEMS, TARGET).unwrap();

    let mut keys = Vec::with_capacity(ITEMS);
    for _ in 0..ITEMS {
        let mut key = [0u8; 16];
        rng.fill(&mut key[..]);
        keys.push(key);
    }

    for key in &keys {
        filter.insert(key);
    }
    for key in &keys {
        assert!(filter.contains(key), "inserted key must always be found");
    }

    let mut false_positives = 0usize;
    for _ in 0..ITEMS {
        let mut key = [0u8; 16];
        rng.fill(&mut key[..]);
        if filter.contains(&key) {
            false_positives += 1;
        }
    }

    let observed = false_positives as f64 / ITEMS as f64;
    assert!(
        observed < TARGET * 1.5,
        "observed rate {} exceeds 1.5x the {} target",
        observed,
        TARGET
    );
}
