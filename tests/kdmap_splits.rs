use kdmap::{KdMap, Pair};

#[test]
fn splits_enumerate_all_internal_pivots() {
    for n in [1usize, 2, 3, 7, 16, 33] {
        let pairs = (0..n)
            .map(|i| Pair::new(format!("k{i:03}"), i as i64))
            .collect();
        let map = KdMap::new(pairs).unwrap();
        assert_eq!(map.key_splits().len() + map.value_splits().len(), n - 1);
    }
}

#[test]
fn a_single_leaf_has_no_splits() {
    let map = KdMap::new(vec![Pair::new("m", 5)]).unwrap();
    assert!(map.key_splits().is_empty());
    assert!(map.value_splits().is_empty());
}
