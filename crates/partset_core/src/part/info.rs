//! Part identity and covering relation.

use crate::index::Covering;
use std::fmt;

/// Identity of a data part.
///
/// Parts order lexicographically by
/// `(partition_id, min_block, max_block, level, mutation)`. Field order
/// below is load-bearing: the derived `Ord` relies on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartInfo {
    partition_id: String,
    min_block: i64,
    max_block: i64,
    level: u32,
    mutation: i64,
}

impl PartInfo {
    /// Creates a part identity with mutation version 0.
    ///
    /// The caller guarantees `min_block <= max_block`; names produced by
    /// [`PartInfo::parse`] are always checked.
    #[must_use]
    pub fn new(partition_id: impl Into<String>, min_block: i64, max_block: i64, level: u32) -> Self {
        debug_assert!(min_block <= max_block);
        Self {
            partition_id: partition_id.into(),
            min_block,
            max_block,
            level,
            mutation: 0,
        }
    }

    /// Sets the mutation version.
    #[must_use]
    pub fn with_mutation(mut self, mutation: i64) -> Self {
        self.mutation = mutation;
        self
    }

    /// Returns the partition id.
    #[must_use]
    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    /// Returns the first block number in the part.
    #[must_use]
    pub const fn min_block(&self) -> i64 {
        self.min_block
    }

    /// Returns the last block number in the part.
    #[must_use]
    pub const fn max_block(&self) -> i64 {
        self.max_block
    }

    /// Returns the merge level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Returns the mutation version.
    #[must_use]
    pub const fn mutation(&self) -> i64 {
        self.mutation
    }

    /// Returns the number of block numbers in the closed range.
    ///
    /// Widened to `u128`: the full `i64` range holds 2^64 blocks.
    #[must_use]
    pub fn block_count(&self) -> u128 {
        u128::from(self.max_block.abs_diff(self.min_block)) + 1
    }

    /// Returns true if `self` supersedes `other`.
    ///
    /// Both parts must be in the same partition and `self`'s block range must
    /// enclose `other`'s. When the ranges are identical, `self` must also have
    /// a `(level, mutation)` pair at least as large. Reflexive: every part
    /// contains itself.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if self.partition_id != other.partition_id
            || self.min_block > other.min_block
            || self.max_block < other.max_block
        {
            return false;
        }

        if self.min_block == other.min_block && self.max_block == other.max_block {
            return (self.level, self.mutation) >= (other.level, other.mutation);
        }

        true
    }

    /// Returns true if the parts share no block numbers.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.partition_id != other.partition_id
            || self.max_block < other.min_block
            || self.min_block > other.max_block
    }

    /// Renders the part name in the custom-partitioning format.
    ///
    /// The mutation suffix is only written when it is non-zero.
    #[must_use]
    pub fn part_name(&self) -> String {
        self.to_string()
    }
}

impl Covering for PartInfo {
    fn contains(&self, other: &Self) -> bool {
        PartInfo::contains(self, other)
    }
}

impl fmt::Display for PartInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.partition_id, self.min_block, self.max_block, self.level
        )?;
        if self.mutation != 0 {
            write!(f, "_{}", self.mutation)?;
        }
        Ok(())
    }
}
