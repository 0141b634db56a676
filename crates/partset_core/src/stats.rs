//! Registry statistics.
//!
//! Counters describing how the active set evolved: how many parts were
//! accepted, how many were superseded by later merges or mutations, and how
//! many submissions were absorbed or rejected.
//!
//! # Usage
//!
//! ```rust,ignore
//! use partset_core::{ActivePartSet, FormatVersion};
//!
//! let parts = ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, ["p_1_1_0", "p_1_2_1"])?;
//!
//! let stats = parts.stats();
//! println!("Superseded: {}", stats.parts_superseded);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Active set statistics.
///
/// All counters are atomic and monotonically increasing. They are updated
/// alongside the index but are not part of its consistency guarantees: a
/// snapshot taken concurrently with an insert may see the index change
/// before the counters do.
#[derive(Debug, Default)]
pub struct ActiveSetStats {
    /// Parts stored in the index.
    parts_added: AtomicU64,
    /// Entries removed because a later part contains them.
    parts_superseded: AtomicU64,
    /// Submissions absorbed because an active part already contains them.
    redundant_adds: AtomicU64,
    /// Names that failed to parse.
    malformed_names: AtomicU64,
}

impl ActiveSetStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted part and the entries it superseded.
    pub(crate) fn record_added(&self, superseded: usize) {
        self.parts_added.fetch_add(1, Ordering::Relaxed);
        self.parts_superseded
            .fetch_add(superseded as u64, Ordering::Relaxed);
    }

    /// Records a submission absorbed by an existing part.
    pub(crate) fn record_redundant(&self) {
        self.redundant_adds.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a name that failed to parse.
    pub(crate) fn record_malformed(&self) {
        self.malformed_names.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of parts stored in the index so far.
    pub fn parts_added(&self) -> u64 {
        self.parts_added.load(Ordering::Relaxed)
    }

    /// Returns the number of entries removed by covering inserts.
    pub fn parts_superseded(&self) -> u64 {
        self.parts_superseded.load(Ordering::Relaxed)
    }

    /// Returns the number of submissions absorbed as already covered.
    pub fn redundant_adds(&self) -> u64 {
        self.redundant_adds.load(Ordering::Relaxed)
    }

    /// Returns the number of names that failed to parse.
    pub fn malformed_names(&self) -> u64 {
        self.malformed_names.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            parts_added: self.parts_added(),
            parts_superseded: self.parts_superseded(),
            redundant_adds: self.redundant_adds(),
            malformed_names: self.malformed_names(),
        }
    }
}

/// A point-in-time snapshot of active set statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Parts stored in the index.
    pub parts_added: u64,
    /// Entries removed because a later part contains them.
    pub parts_superseded: u64,
    /// Submissions absorbed as already covered.
    pub redundant_adds: u64,
    /// Names that failed to parse.
    pub malformed_names: u64,
}

impl StatsSnapshot {
    /// Number of entries the index should hold according to the counters.
    #[must_use]
    pub fn expected_active(&self) -> u64 {
        self.parts_added.saturating_sub(self.parts_superseded)
    }
}
