//! A balanced two-dimensional k-d tree over `(String, i64)` pairs.
//!
//! Levels alternate their split axis between the key dimension and the
//! value dimension, with the root splitting on keys. Construction selects
//! the upper median on the current axis via randomized quickselect and
//! recurses, so the tree is balanced regardless of input order. The median
//! pair is kept in the right half, which makes every internal pivot a
//! faithful copy of a leaf in its own right subtree.
//!
//! The map is immutable once built: there is no insert, delete, or update
//! path, and queries never mutate a node.

mod node;
mod select;

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use rand::thread_rng;
use rand::Rng;
#[cfg(feature = "proptest")]
use proptest::prelude::RngCore;

use node::Node;

/// A single key-value pair stored in the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, arbitrary::Arbitrary)]
pub struct Pair {
    pub key: String,
    pub value: i64,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Pair {
            key: key.into(),
            value,
        }
    }
}

/// The dimension a tree level partitions on.
///
/// Key-axis nodes order their subtrees by lexicographic key comparison,
/// value-axis nodes by numeric value comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Key,
    Value,
}

impl Axis {
    /// The opposite axis. Children always split on the flip of their parent.
    pub(crate) fn flip(self) -> Self {
        match self {
            Axis::Key => Axis::Value,
            Axis::Value => Axis::Key,
        }
    }
}

/// Reasons a pair set can be refused at construction time.
///
/// The builder requires at least one pair, and duplicate keys are rejected
/// up front so lookups never depend on which copy the tree shape happens
/// to favor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    EmptyInput,
    DuplicateKey(String),
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::EmptyInput => {
                write!(f, "cannot build a kd-map from an empty pair set")
            }
            ConstructError::DuplicateKey(key) => {
                write!(f, "duplicate key in input pair set: {key:?}")
            }
        }
    }
}

impl Error for ConstructError {}

/// An immutable map from string keys to integer values with support for
/// rectangle queries over the composite (key, value) space.
///
/// Built once from a set of unique-key pairs; read-only afterwards. Point
/// lookups and rectangle queries both run in expected `O(√n)` time, the
/// standard bound for single-axis pruning on an alternating-axis
/// two-dimensional tree.
#[derive(Debug, Clone)]
pub struct KdMap {
    root: Node,
    len: usize,
}

impl KdMap {
    /// Builds a map from `pairs`, choosing quickselect pivots with
    /// [`thread_rng`]. Expected `O(n log n)`.
    ///
    /// Fails on an empty input or when two pairs share a key.
    pub fn new(pairs: Vec<Pair>) -> Result<Self, ConstructError> {
        Self::with_rng(pairs, &mut thread_rng())
    }

    /// Builds a map using the supplied random generator for pivot choice.
    ///
    /// Pivot randomness only affects the internal tree shape; query results
    /// are identical across seeds. A seeded generator makes the shape
    /// itself repeatable, which the tests rely on.
    pub fn with_rng<R: Rng>(mut pairs: Vec<Pair>, rng: &mut R) -> Result<Self, ConstructError> {
        if pairs.is_empty() {
            return Err(ConstructError::EmptyInput);
        }
        let mut seen = HashSet::with_capacity(pairs.len());
        for pair in &pairs {
            if !seen.insert(pair.key.as_str()) {
                return Err(ConstructError::DuplicateKey(pair.key.clone()));
            }
        }
        drop(seen);

        let len = pairs.len();
        let root = Node::build(&mut pairs, 0, len - 1, Axis::Key, rng);
        Ok(KdMap { root, len })
    }

    /// Number of pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty inputs. Kept for
    /// collection API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up the value stored under `key`. Expected `O(√n)`.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.root.search(key)
    }

    /// Returns every pair in the map. Order is unspecified and depends on
    /// the tree shape.
    pub fn all_pairs(&self) -> Vec<Pair> {
        let mut pairs = Vec::with_capacity(self.len);
        self.root.collect_pairs(&mut pairs);
        pairs
    }

    /// Returns every pair inside the half-open box
    /// `[start.0, end.0) × [start.1, end.1)`: keys at or above `start.0`
    /// and strictly below `end.0`, values at or above `start.1` and
    /// strictly below `end.1`. Order is unspecified. Expected `O(√n)`
    /// plus output size.
    pub fn range(&self, start: (&str, i64), end: (&str, i64)) -> Vec<Pair> {
        let mut found = Vec::new();
        self.root.collect_range(start, end, &mut found);
        found
    }

    /// The pivot keys of all key-axis internal nodes, in pre-order. `O(n)`.
    pub fn key_splits(&self) -> Vec<String> {
        let mut splits = Vec::new();
        self.root.collect_key_splits(&mut splits);
        splits
    }

    /// The pivot values of all value-axis internal nodes, in pre-order.
    /// Together with [`key_splits`](Self::key_splits) this enumerates all
    /// `n - 1` internal pivots. `O(n)`.
    pub fn value_splits(&self) -> Vec<i64> {
        let mut splits = Vec::new();
        self.root.collect_value_splits(&mut splits);
        splits
    }
}

#[cfg(feature = "proptest")]
pub struct PairsValueTree(Vec<Pair>);

/// Generates pair sets of 1 up to `max_len` pairs with unique random
/// keys. Does not shrink.
#[cfg(feature = "proptest")]
#[derive(Debug)]
pub struct RandomUniquePairs {
    pub max_len: usize,
}

#[cfg(feature = "proptest")]
impl proptest::strategy::Strategy for RandomUniquePairs {
    type Tree = PairsValueTree;
    type Value = Vec<Pair>;

    fn new_tree(
        &self,
        runner: &mut proptest::prelude::prop::test_runner::TestRunner,
    ) -> proptest::prelude::prop::strategy::NewTree<Self> {
        let rng = runner.rng();

        let mut len_bytes = [0u8; 8];
        rng.fill_bytes(&mut len_bytes);
        let len = 1 + (u64::from_le_bytes(len_bytes) % self.max_len as u64) as usize;

        let mut keys = HashSet::with_capacity(len);
        let mut pairs = Vec::with_capacity(len);
        while pairs.len() < len {
            let mut key_bytes = [0u8; 4];
            rng.fill_bytes(&mut key_bytes);
            let key = format!("{:08x}", u32::from_le_bytes(key_bytes));
            if !keys.insert(key.clone()) {
                continue;
            }
            let mut value_bytes = [0u8; 8];
            rng.fill_bytes(&mut value_bytes);
            pairs.push(Pair::new(key, i64::from_le_bytes(value_bytes)));
        }

        Ok(PairsValueTree(pairs))
    }
}

#[cfg(feature = "proptest")]
impl proptest::strategy::ValueTree for PairsValueTree {
    type Value = Vec<Pair>;

    fn simplify(&mut self) -> bool {
        false
    }
    fn complicate(&mut self) -> bool {
        false
    }
    fn current(&self) -> Vec<Pair> {
        self.0.clone()
    }
}
