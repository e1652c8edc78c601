use std::cmp::Ordering;

use rand::Rng;

use super::{Axis, Pair};

fn axis_cmp(a: &Pair, b: &Pair, axis: Axis) -> Ordering {
    match axis {
        Axis::Key => a.key.cmp(&b.key),
        Axis::Value => a.value.cmp(&b.value),
    }
}

/// Lomuto partition of `pairs[left..=right]` around the element at
/// `pivot`, comparing on `axis`. Returns the pivot's final position; all
/// elements strictly less than it end up to its left, everything else
/// (equal elements included) to its right.
fn partition(pairs: &mut [Pair], pivot: usize, left: usize, right: usize, axis: Axis) -> usize {
    pairs.swap(pivot, right);
    let mut boundary = left;
    for i in left..right {
        if axis_cmp(&pairs[i], &pairs[right], axis) == Ordering::Less {
            pairs.swap(i, boundary);
            boundary += 1;
        }
    }
    pairs.swap(boundary, right);
    boundary
}

/// Randomized quickselect: rearranges `pairs[left..=right]` so position
/// `k` holds the pair of rank `k` under the `axis` ordering, with smaller
/// elements before it and greater-or-equal elements after it, and returns
/// a copy of that pair. Expected time linear in the range size.
pub(crate) fn select_rank<R: Rng>(
    pairs: &mut [Pair],
    k: usize,
    mut left: usize,
    mut right: usize,
    axis: Axis,
    rng: &mut R,
) -> Pair {
    loop {
        if left == right {
            return pairs[left].clone();
        }
        let pivot = rng.gen_range(left..=right);
        let at = partition(pairs, pivot, left, right, axis);
        match at.cmp(&k) {
            Ordering::Equal => return pairs[k].clone(),
            Ordering::Greater => right = at - 1,
            Ordering::Less => left = at + 1,
        }
    }
}
