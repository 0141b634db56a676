//! Ordered map holding only maximal entries.

use super::Covering;
use std::collections::BTreeMap;

/// Result of [`CoveringIndex::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<K, V> {
    /// The entry was stored. Entries it covers were removed and are returned
    /// in ascending key order.
    Inserted {
        /// Entries removed because the new key contains them.
        superseded: Vec<(K, V)>,
    },
    /// An existing entry already contains the key. Nothing changed and the
    /// rejected entry is handed back.
    Covered {
        /// The rejected key.
        key: K,
        /// The rejected value.
        value: V,
    },
}

impl<K, V> InsertOutcome<K, V> {
    /// Returns true if the entry was stored.
    #[must_use]
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Ordered map whose keys form an antichain under [`Covering::contains`].
///
/// Inserting a key that an existing entry contains is a no-op; inserting a
/// key that contains existing entries removes them. Because covered keys sit
/// contiguously around the insertion point, every operation only walks the
/// neighbors of that point:
///
/// - [`insert`](Self::insert): `O(log n + k)` for `k` superseded entries
/// - [`get_containing`](Self::get_containing): `O(log n)`
/// - [`covered_by`](Self::covered_by): `O(log n + m)` for `m` results
///
/// # Example
///
/// ```rust,ignore
/// let mut index = CoveringIndex::new();
/// index.insert(PartInfo::new("p", 1, 1, 0), "p_1_1_0".to_string());
/// index.insert(PartInfo::new("p", 1, 2, 1), "p_1_2_1".to_string());
///
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CoveringIndex<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Covering, V> Default for CoveringIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Covering, V> CoveringIndex<K, V> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the entry that contains `key`, if any.
    ///
    /// Only the entry at or after `key` and the one before it are examined.
    /// A containing entry further away would also contain the nearer
    /// neighbor, which the antichain invariant rules out.
    pub fn get_containing(&self, key: &K) -> Option<(&K, &V)> {
        if let Some((k, v)) = self.entries.range(key..).next() {
            if k.contains(key) {
                return Some((k, v));
            }
        }

        self.entries
            .range(..key)
            .next_back()
            .filter(|(k, _)| k.contains(key))
    }

    /// Returns the entries contained by `key`, in ascending key order.
    ///
    /// Returns an empty vector if an entry other than the ones `key`
    /// contains is found to contain `key`: the caller asked about a key that
    /// is itself covered.
    pub fn covered_by(&self, key: &K) -> Vec<(&K, &V)> {
        let mut covered = Vec::new();

        for (k, v) in self.entries.range(..key).rev() {
            if key.contains(k) {
                covered.push((k, v));
                continue;
            }
            if k.contains(key) {
                return Vec::new();
            }
            break;
        }
        covered.reverse();

        for (k, v) in self.entries.range(key..) {
            if key.contains(k) {
                covered.push((k, v));
                continue;
            }
            if k.contains(key) {
                return Vec::new();
            }
            break;
        }

        covered
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Iterates keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.keys()
    }

    /// Iterates values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.values()
    }
}

impl<K: Covering + Clone, V> CoveringIndex<K, V> {
    /// Inserts an entry, keeping only maximal keys.
    ///
    /// If an existing entry contains `key` (including an equal key), the
    /// index is left untouched and the entry is returned as
    /// [`InsertOutcome::Covered`]. Otherwise every entry `key` contains is
    /// removed before the entry is stored.
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome<K, V> {
        if self.get_containing(&key).is_some() {
            return InsertOutcome::Covered { key, value };
        }

        // Covered entries form one run on each side of the insertion point.
        let left: Vec<K> = self
            .entries
            .range(..&key)
            .rev()
            .map(|(k, _)| k)
            .take_while(|k| key.contains(k))
            .cloned()
            .collect();
        let right: Vec<K> = self
            .entries
            .range(&key..)
            .map(|(k, _)| k)
            .take_while(|k| key.contains(k))
            .cloned()
            .collect();

        let superseded = left
            .iter()
            .rev()
            .chain(right.iter())
            .filter_map(|k| self.entries.remove_entry(k))
            .collect();

        self.entries.insert(key, value);
        InsertOutcome::Inserted { superseded }
    }
}

impl<K: Covering + Clone, V> Extend<(K, V)> for CoveringIndex<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Covering + Clone, V> FromIterator<(K, V)> for CoveringIndex<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Closed interval ordered by (start, end, version).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Span(u32, u32, u32);

    impl Covering for Span {
        fn contains(&self, other: &Self) -> bool {
            if self.0 == other.0 && self.1 == other.1 {
                return self.2 >= other.2;
            }
            self.0 <= other.0 && self.1 >= other.1
        }
    }

    fn index_of(spans: &[Span]) -> CoveringIndex<Span, u32> {
        spans.iter().map(|s| (*s, s.0 * 100 + s.1)).collect()
    }

    fn keys(index: &CoveringIndex<Span, u32>) -> Vec<Span> {
        index.keys().copied().collect()
    }

    #[test]
    fn insert_disjoint() {
        let index = index_of(&[Span(2, 2, 0), Span(1, 1, 0)]);
        assert_eq!(keys(&index), vec![Span(1, 1, 0), Span(2, 2, 0)]);
    }

    #[test]
    fn insert_supersedes_both_sides() {
        let mut index = index_of(&[Span(0, 0, 0), Span(1, 1, 0), Span(2, 2, 0), Span(4, 4, 0)]);

        let outcome = index.insert(Span(1, 3, 1), 103);
        assert_eq!(
            outcome,
            InsertOutcome::Inserted {
                superseded: vec![(Span(1, 1, 0), 101), (Span(2, 2, 0), 202)]
            }
        );
        assert_eq!(keys(&index), vec![Span(0, 0, 0), Span(1, 3, 1), Span(4, 4, 0)]);
    }

    #[test]
    fn insert_supersedes_run_ending_at_upper_bound() {
        let mut index = index_of(&[
            Span(0, 0, 0),
            Span(1, 1, 0),
            Span(2, 2, 0),
            Span(3, 3, 0),
            Span(5, 5, 0),
        ]);

        // Span(1, 1, 0) sorts before the new key, the other two after it.
        let outcome = index.insert(Span(1, 3, 1), 103);
        assert_eq!(
            outcome,
            InsertOutcome::Inserted {
                superseded: vec![(Span(1, 1, 0), 101), (Span(2, 2, 0), 202), (Span(3, 3, 0), 303)]
            }
        );
        assert_eq!(keys(&index), vec![Span(0, 0, 0), Span(1, 3, 1), Span(5, 5, 0)]);
    }

    #[test]
    fn insert_supersedes_lower_version_of_same_range() {
        let mut index = index_of(&[Span(1, 2, 0)]);
        assert!(index.insert(Span(1, 2, 3), 0).is_inserted());
        assert_eq!(keys(&index), vec![Span(1, 2, 3)]);
    }

    #[test]
    fn insert_covered_is_noop() {
        let mut index = index_of(&[Span(1, 4, 1)]);

        let outcome = index.insert(Span(2, 3, 0), 7);
        assert_eq!(
            outcome,
            InsertOutcome::Covered {
                key: Span(2, 3, 0),
                value: 7
            }
        );
        assert_eq!(keys(&index), vec![Span(1, 4, 1)]);
    }

    #[test]
    fn insert_equal_key_is_noop() {
        let mut index = index_of(&[Span(1, 4, 1)]);
        assert!(!index.insert(Span(1, 4, 1), 0).is_inserted());
        assert_eq!(index.values().copied().collect::<Vec<_>>(), vec![104]);
    }

    #[test]
    fn get_containing_checks_both_neighbors() {
        let index = index_of(&[Span(1, 3, 1), Span(5, 9, 1)]);

        // Sorts before its container.
        assert_eq!(index.get_containing(&Span(1, 1, 0)).map(|(k, _)| *k), Some(Span(1, 3, 1)));
        // Sorts after its container.
        assert_eq!(index.get_containing(&Span(6, 7, 0)).map(|(k, _)| *k), Some(Span(5, 9, 1)));
        assert_eq!(index.get_containing(&Span(4, 4, 0)), None);
        assert_eq!(index.get_containing(&Span(0, 10, 2)), None);
    }

    #[test]
    fn covered_by_returns_run_in_order() {
        let index = index_of(&[Span(0, 0, 0), Span(1, 1, 0), Span(2, 2, 0), Span(3, 3, 0)]);

        let covered: Vec<Span> = index.covered_by(&Span(1, 2, 1)).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(covered, vec![Span(1, 1, 0), Span(2, 2, 0)]);
    }

    #[test]
    fn covered_by_of_covered_key_is_empty() {
        let index = index_of(&[Span(1, 2, 1)]);
        assert!(index.covered_by(&Span(1, 1, 0)).is_empty());
        assert!(index.covered_by(&Span(2, 2, 0)).is_empty());
    }

    #[test]
    fn covered_by_includes_equal_key() {
        let index = index_of(&[Span(1, 2, 1)]);
        let covered: Vec<Span> = index.covered_by(&Span(1, 2, 1)).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(covered, vec![Span(1, 2, 1)]);
    }

    #[test]
    fn empty_index() {
        let index: CoveringIndex<Span, u32> = CoveringIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.get_containing(&Span(1, 1, 0)), None);
        assert!(index.covered_by(&Span(0, 9, 0)).is_empty());
    }

    /// Builds the spans of a binary merge tree over `0..width` and returns
    /// them in an arbitrary order along with the root.
    fn merge_tree(width: u32) -> Vec<Span> {
        fn build(lo: u32, hi: u32, level: u32, out: &mut Vec<Span>) {
            out.push(Span(lo, hi, level));
            if lo < hi {
                let mid = lo + (hi - lo) / 2;
                build(lo, mid, level.saturating_sub(1), out);
                build(mid + 1, hi, level.saturating_sub(1), out);
            }
        }
        let mut out = Vec::new();
        build(0, width - 1, 32, &mut out);
        out
    }

    proptest! {
        #[test]
        fn antichain_after_any_order(
            width in 1u32..24,
            order in prop::collection::vec(any::<prop::sample::Index>(), 0..64),
        ) {
            let mut spans = merge_tree(width);
            for (i, pick) in order.iter().enumerate() {
                let n = spans.len();
                spans.swap(i % n, pick.index(n));
            }

            let index = index_of(&spans);
            let active = keys(&index);

            // The root covers everything in the tree.
            prop_assert_eq!(active, vec![Span(0, width - 1, 32)]);
        }

        #[test]
        fn leaves_then_partial_merges_stay_maximal(
            width in 1u32..32,
            merges in prop::collection::vec((0u32..32, 0u32..8), 0..16),
        ) {
            let mut index: CoveringIndex<Span, u32> =
                (0..width).map(|b| (Span(b, b, 0), b)).collect();

            for (start, len) in merges {
                let start = start % width;
                let end = (start + len).min(width - 1);
                // Only merge runs aligned with current entries so ranges stay nested.
                let aligned = index.keys().any(|k| k.0 == start)
                    && index.keys().any(|k| k.1 == end);
                if aligned {
                    index.insert(Span(start, end, 1), 0);
                }
            }

            let active = keys(&index);
            for (i, a) in active.iter().enumerate() {
                for b in &active[i + 1..] {
                    prop_assert!(!a.contains(b) && !b.contains(a));
                }
            }
            let covered: u32 = active.iter().map(|s| s.1 - s.0 + 1).sum();
            prop_assert_eq!(covered, width);
        }
    }
}
