use kdmap::{ConstructError, KdMap, Pair};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn empty_input_is_a_construction_error() {
    assert_eq!(KdMap::new(vec![]).unwrap_err(), ConstructError::EmptyInput);
}

#[test]
fn duplicate_keys_are_a_construction_error() {
    let err = KdMap::new(vec![Pair::new("a", 1), Pair::new("a", 2)]).unwrap_err();
    assert_eq!(err, ConstructError::DuplicateKey("a".to_string()));
    assert_eq!(
        err.to_string(),
        "duplicate key in input pair set: \"a\""
    );
}

#[test]
fn seeded_construction_is_reproducible() {
    let pairs: Vec<Pair> = (0..20i64)
        .map(|i| Pair::new(format!("k{i:02}"), i * 3 - 10))
        .collect();

    let map_a = KdMap::with_rng(pairs.clone(), &mut StdRng::seed_from_u64(7)).unwrap();
    let map_b = KdMap::with_rng(pairs, &mut StdRng::seed_from_u64(7)).unwrap();

    // Same seed, same pivot sequence, same tree shape.
    assert_eq!(map_a.key_splits(), map_b.key_splits());
    assert_eq!(map_a.value_splits(), map_b.value_splits());
    assert_eq!(map_a.all_pairs(), map_b.all_pairs());
}
