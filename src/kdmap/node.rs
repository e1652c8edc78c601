use rand::Rng;

use super::select;
use super::{Axis, Pair};

/// A tree node. A node with both children absent is a leaf holding one
/// original input pair; any other node is an internal split whose pair is
/// the median pivot, reproduced verbatim as a leaf somewhere in its right
/// subtree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pair: Pair,
    axis: Axis,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(pair: Pair, axis: Axis) -> Node {
        Node {
            pair,
            axis,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Builds the subtree for the inclusive range `[left, right]`,
    /// splitting on `axis` at this level and on the flipped axis below.
    ///
    /// The split rank is the upper median, and the median pair goes into
    /// the right half, so the right child always exists. The left range
    /// `[left, median - 1]` is non-empty whenever the range holds more
    /// than one pair; the guard keeps a degenerate range from underflowing.
    pub(crate) fn build<R: Rng>(
        pairs: &mut [Pair],
        left: usize,
        right: usize,
        axis: Axis,
        rng: &mut R,
    ) -> Node {
        if left == right {
            return Node::leaf(pairs[right].clone(), axis);
        }
        let median = (left + right + 1) / 2;
        let pivot = select::select_rank(pairs, median, left, right, axis, rng);

        let left_child = if median > left {
            Some(Box::new(Node::build(
                pairs,
                left,
                median - 1,
                axis.flip(),
                rng,
            )))
        } else {
            None
        };
        let right_child = Some(Box::new(Node::build(
            pairs,
            median,
            right,
            axis.flip(),
            rng,
        )));

        Node {
            pair: pivot,
            axis,
            left: left_child,
            right: right_child,
        }
    }

    /// Point lookup. An exact key match anywhere, leaf or internal,
    /// answers immediately; internal pivots are copies of real leaves, so
    /// the value is authoritative. Key-axis nodes prune to one child,
    /// value-axis nodes must search both.
    pub(crate) fn search(&self, key: &str) -> Option<i64> {
        if self.pair.key == key {
            return Some(self.pair.value);
        }
        match self.axis {
            Axis::Key => {
                let child = if key < self.pair.key.as_str() {
                    &self.left
                } else {
                    &self.right
                };
                child.as_deref()?.search(key)
            }
            Axis::Value => self
                .left
                .as_deref()
                .and_then(|node| node.search(key))
                .or_else(|| self.right.as_deref().and_then(|node| node.search(key))),
        }
    }

    /// Collects every leaf pair inside the half-open box
    /// `[start.0, end.0) × [start.1, end.1)`.
    ///
    /// At an internal node, a pivot inside the box bounds on this axis
    /// forces descent into both halves; a pivot below the lower bound
    /// rules out the left subtree (everything there is ≤ pivot) and a
    /// pivot at or above the upper bound rules out the right subtree
    /// (everything there is ≥ pivot).
    pub(crate) fn collect_range(
        &self,
        start: (&str, i64),
        end: (&str, i64),
        found: &mut Vec<Pair>,
    ) {
        if self.is_leaf() {
            if in_box(&self.pair, start, end) {
                found.push(self.pair.clone());
            }
            return;
        }
        let (descend_left, descend_right) = match self.axis {
            Axis::Key => {
                let key = self.pair.key.as_str();
                (key >= start.0, key < end.0)
            }
            Axis::Value => {
                let value = self.pair.value;
                (value >= start.1, value < end.1)
            }
        };
        if descend_left {
            if let Some(node) = &self.left {
                node.collect_range(start, end, found);
            }
        }
        if descend_right {
            if let Some(node) = &self.right {
                node.collect_range(start, end, found);
            }
        }
    }

    /// Pre-order dump of every leaf pair. Internal pivots are copies of
    /// leaves and contribute nothing themselves.
    pub(crate) fn collect_pairs(&self, pairs: &mut Vec<Pair>) {
        if self.is_leaf() {
            pairs.push(self.pair.clone());
            return;
        }
        if let Some(node) = &self.left {
            node.collect_pairs(pairs);
        }
        if let Some(node) = &self.right {
            node.collect_pairs(pairs);
        }
    }

    /// Pre-order collection of the pivot keys of key-axis internal nodes.
    pub(crate) fn collect_key_splits(&self, splits: &mut Vec<String>) {
        if self.is_leaf() {
            return;
        }
        if self.axis == Axis::Key {
            splits.push(self.pair.key.clone());
        }
        if let Some(node) = &self.left {
            node.collect_key_splits(splits);
        }
        if let Some(node) = &self.right {
            node.collect_key_splits(splits);
        }
    }

    /// Pre-order collection of the pivot values of value-axis internal
    /// nodes.
    pub(crate) fn collect_value_splits(&self, splits: &mut Vec<i64>) {
        if self.is_leaf() {
            return;
        }
        if self.axis == Axis::Value {
            splits.push(self.pair.value);
        }
        if let Some(node) = &self.left {
            node.collect_value_splits(splits);
        }
        if let Some(node) = &self.right {
            node.collect_value_splits(splits);
        }
    }
}

/// Membership test for the half-open box, inclusive at `start` and
/// exclusive at `end` on both axes.
fn in_box(pair: &Pair, start: (&str, i64), end: (&str, i64)) -> bool {
    pair.key.as_str() >= start.0
        && pair.key.as_str() < end.0
        && pair.value >= start.1
        && pair.value < end.1
}
