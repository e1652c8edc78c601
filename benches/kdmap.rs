use std::time::Instant;

use fake::faker::lorem::en::Word;
use fake::Fake;
use kdmap::{KdMap, Pair};

fn main() {
    const N: usize = 1_000_000;

    let mut pairs = Vec::with_capacity(N);
    for i in 0..N {
        let word: String = Word().fake();
        // Word() repeats; the index suffix keeps keys unique.
        pairs.push(Pair::new(format!("{word}-{i}"), i as i64));
    }
    let probe_keys: Vec<String> = pairs.iter().step_by(997).map(|p| p.key.clone()).collect();

    let start = Instant::now();
    let map = KdMap::new(pairs).unwrap();
    println!("build {} pairs: {:?}", map.len(), start.elapsed());

    let start = Instant::now();
    let mut hits = 0usize;
    for key in &probe_keys {
        if map.get(key).is_some() {
            hits += 1;
        }
    }
    println!(
        "{} point lookups ({} hits): {:?}",
        probe_keys.len(),
        hits,
        start.elapsed()
    );

    let start = Instant::now();
    let band = map.range(("a", 0), ("n", (N / 2) as i64));
    println!("range sweep ({} pairs): {:?}", band.len(), start.elapsed());
}
