//! Key capability required by the covering index.

/// A key that can supersede other keys.
///
/// Implementations must uphold, for every pair of keys stored together in a
/// [`CoveringIndex`](super::CoveringIndex):
///
/// - `contains` is reflexive and transitive.
/// - Keys that share data are comparable: if two keys overlap, one contains
///   the other. A genuine partial overlap breaks the index's neighbor-only
///   lookups.
/// - `Ord` places every key contained by `k` in one contiguous run around
///   the position `k` would be inserted at.
///
/// The index relies on these properties and does not re-check them.
pub trait Covering: Ord {
    /// Returns true if `self` supersedes `other`.
    fn contains(&self, other: &Self) -> bool;
}

