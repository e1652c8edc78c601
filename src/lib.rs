//! An immutable two-dimensional k-d tree map over `(String, i64)` pairs.
//!
//! The tree is built once from a fixed set of unique-key pairs and is
//! read-only afterwards. It answers exact-key lookups and axis-aligned
//! half-open rectangle queries over the composite (key, value) space.
//!
//! See the [`kdmap`] module for the full API.

pub mod kdmap;

pub use kdmap::{Axis, ConstructError, KdMap, Pair};
