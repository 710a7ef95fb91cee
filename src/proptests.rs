use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=5, 1..=6)
}

fn raw_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![
        80 => 0usize..10_000,
        20 => any::<usize>(),
    ]
}

/// Checks `n` against a map from flat address to the marker last written there.
fn validate(n: &Nested<Marker>, model: &BTreeMap<usize, Marker>) {
    let shape = n.shape();
    assert_eq!(n.root().shape().as_ref(), Ok(shape));
    assert_eq!(n.leaves().count(), shape.len());
    assert_eq!(n.count_populated(), model.len());
    assert!(n.count_populated() <= shape.len());

    let mut seen = BTreeMap::new();
    n.for_each_populated(|path, marker| {
        assert!(seen.insert(shape.to_usize(path), *marker).is_none(), "path visited twice");
    });
    assert_eq!(&seen, model);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_empty_after_build(sizes in sizes_strategy()) {
        let n: Nested<Marker> = Nested::build(sizes.clone()).unwrap();
        prop_assert_eq!(n.shape().sizes(), &sizes[..]);
        prop_assert_eq!(n.count_populated(), 0);
        prop_assert_eq!(n.shape().len(), sizes.iter().product::<usize>());
    }

    #[test]
    fn prop_write_then_read(sizes in sizes_strategy(), raw in raw_strategy()) {
        let mut n: Nested<Marker> = Nested::build(sizes).unwrap();
        let len = n.shape().len();
        let address = raw % len;
        prop_assert_eq!(n.write_at(raw).unwrap(), None);
        prop_assert_eq!(n.read_at(raw).unwrap(), Some(&Marker {id: address}));
        let path = n.locate(raw).unwrap();
        prop_assert_eq!(&path, &n.shape().from_usize(address).1);
        prop_assert_eq!(n.shape().to_usize(&path), address);
        prop_assert_eq!(n.get(&path), Some(&Marker {id: address}));
        prop_assert_eq!(n.count_populated(), 1);
    }

    #[test]
    fn prop_same_address_overwrites(sizes in sizes_strategy(), raw in 0usize..10_000, laps in 1usize..100) {
        let mut n: Nested<Marker> = Nested::build(sizes).unwrap();
        let len = n.shape().len();
        let again = raw % len + laps * len;
        n.write_at(raw).unwrap();
        prop_assert_eq!(n.write_at(again).unwrap(), Some(Marker {id: raw % len}));
        prop_assert_eq!(n.count_populated(), 1);
        prop_assert_eq!(n.read_at(raw).unwrap(), Some(&Marker {id: again % len}));
    }

    #[test]
    fn prop_matches_model(
        sizes in sizes_strategy(),
        raws in prop::collection::vec(raw_strategy(), 0..300),
    ) {
        let mut n: Nested<Marker> = Nested::build(sizes).unwrap();
        let mut model = BTreeMap::new();
        for raw in raws {
            let address = n.address(raw);
            let old = n.write_at(raw).unwrap();
            prop_assert_eq!(old, model.insert(address, Marker {id: address}));
        }
        validate(&n, &model);

        n.clear();
        model.clear();
        validate(&n, &model);
    }

    #[test]
    fn prop_wrapped_in_bounds(
        sizes in sizes_strategy(),
        modulus in 1usize..100_000,
        raws in prop::collection::vec(raw_strategy(), 0..100),
    ) {
        let modulus = std::num::NonZeroUsize::new(modulus).unwrap();
        let mut n: Nested<Marker> = Nested::build(sizes).unwrap();
        let mut model = BTreeMap::new();
        for raw in raws {
            let id = raw % modulus;
            let address = id % n.shape().len();
            n.write_wrapped(raw, modulus).unwrap();
            model.insert(address, Marker {id});
        }
        prop_assert!(n.count_populated() <= n.shape().len());
        validate(&n, &model);
    }

    #[test]
    fn prop_from_node_round_trip(
        sizes in sizes_strategy(),
        raws in prop::collection::vec(raw_strategy(), 0..50),
    ) {
        let mut n: Nested<Marker> = Nested::build(sizes).unwrap();
        for raw in raws { n.write_at(raw).unwrap(); }
        let rebuilt = Nested::from_node(n.root().clone()).unwrap();
        prop_assert_eq!(rebuilt, n);
    }
}

#[test]
fn scenario_agrees_with_model() {
    for rank in 1..=scenario::REFERENCE_RANKS {
        for size in [3, 5] {
            let scenario = Scenario::reference(rank, size).unwrap();
            let len = scenario.shape.len();
            let distinct: std::collections::BTreeSet<usize> = scenario.indices().map(|raw| raw % len).collect();
            assert_eq!(scenario.run().unwrap(), distinct.len());
        }
    }
}
