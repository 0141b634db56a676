//! Thread-safe registry of active parts.
//!
//! [`ActivePartSet`] wraps a [`CoveringIndex`] keyed by [`PartInfo`] in a
//! single mutex. Names are parsed before the lock is taken, so a malformed
//! name never touches the index. Every operation, including read-only ones,
//! holds the lock for its whole duration and never calls back into another
//! public operation while holding it.

use crate::config::Config;
use crate::error::CoreResult;
use crate::index::{CoveringIndex, InsertOutcome};
use crate::part::PartInfo;
use crate::stats::{ActiveSetStats, StatsSnapshot};
use crate::types::FormatVersion;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

/// Result of [`ActivePartSet::add_reporting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The part became active.
    Inserted {
        /// Names of previously active parts it superseded, in key order.
        superseded: Vec<String>,
    },
    /// An active part already contains the submitted one.
    Covered {
        /// Name of the containing active part.
        by: String,
    },
}

impl AddOutcome {
    /// Returns true if the part became active.
    #[must_use]
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// The set of parts a reader should currently consult.
///
/// Holds exactly the maximal parts under [`PartInfo::contains`]: adding a
/// part removes every active part it contains, and adding a part that an
/// active part contains changes nothing.
///
/// # Example
///
/// ```rust,ignore
/// use partset_core::{ActivePartSet, FormatVersion};
///
/// let parts = ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, ["p_1_1_0", "p_2_2_0"])?;
/// parts.add("p_1_2_1")?;
///
/// assert_eq!(parts.get_parts(), vec!["p_1_2_1"]);
/// assert_eq!(parts.get_containing_part("p_1_1_0")?.as_deref(), Some("p_1_2_1"));
/// ```
#[derive(Debug)]
pub struct ActivePartSet {
    format_version: FormatVersion,
    parts: Mutex<CoveringIndex<PartInfo, String>>,
    stats: ActiveSetStats,
}

impl ActivePartSet {
    /// Creates a registry seeded with `names`, applied one at a time in the
    /// order given.
    ///
    /// # Errors
    ///
    /// Fails on the first name that does not parse under `format_version`.
    pub fn new<I, S>(format_version: FormatVersion, names: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(&Config::new().format_version(format_version), names)
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn empty(format_version: FormatVersion) -> Self {
        Self {
            format_version,
            parts: Mutex::new(CoveringIndex::new()),
            stats: ActiveSetStats::new(),
        }
    }

    /// Creates a registry seeded with `names` using `config`.
    ///
    /// With [`Config::skip_malformed_on_seed`] set, names that fail to parse
    /// are logged and skipped.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed name unless skipping is enabled.
    pub fn with_config<I, S>(config: &Config, names: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::empty(config.format_version);
        let mut index = CoveringIndex::new();

        for name in names {
            let name = name.into();
            match set.parse(&name) {
                Ok(info) => {
                    set.insert_parsed(&mut index, info, name);
                }
                Err(err) if config.skip_malformed_on_seed => {
                    warn!(part = %name, error = %err, "skipping malformed part name");
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            active = index.len(),
            format_version = %config.format_version,
            "seeded active part set"
        );
        *set.parts.get_mut() = index;
        Ok(set)
    }

    /// Registers a part.
    ///
    /// Adding a part an active part already contains, including the same
    /// part again, is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedPartName`](crate::CoreError::MalformedPartName)
    /// if `name` does not parse; the set is left unchanged.
    pub fn add(&self, name: impl Into<String>) -> CoreResult<()> {
        self.add_reporting(name).map(|_| ())
    }

    /// Registers a part and reports what happened to the active set.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn add_reporting(&self, name: impl Into<String>) -> CoreResult<AddOutcome> {
        let name = name.into();
        let info = self.parse(&name)?;

        let mut parts = self.parts.lock();
        Ok(self.insert_parsed(&mut parts, info, name))
    }

    /// Returns the name of the active part containing `part_name`, if any.
    ///
    /// An active part equal to `part_name` counts as containing it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedPartName`](crate::CoreError::MalformedPartName)
    /// if `part_name` does not parse.
    pub fn get_containing_part(&self, part_name: &str) -> CoreResult<Option<String>> {
        let info = self.parse(part_name)?;
        Ok(self.get_containing_part_info(&info))
    }

    /// Returns the name of the active part containing `info`, if any.
    #[must_use]
    pub fn get_containing_part_info(&self, info: &PartInfo) -> Option<String> {
        let parts = self.parts.lock();
        parts.get_containing(info).map(|(_, name)| name.clone())
    }

    /// Returns the active parts whose blocks lie inside `info`'s range, in
    /// key order.
    ///
    /// Returns an empty list when `info` is itself covered by an active part
    /// other than one equal to it.
    #[must_use]
    pub fn get_parts_covered_by(&self, info: &PartInfo) -> Vec<String> {
        let parts = self.parts.lock();
        parts
            .covered_by(info)
            .into_iter()
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Returns the names of all active parts in key order.
    #[must_use]
    pub fn get_parts(&self) -> Vec<String> {
        let parts = self.parts.lock();
        parts.values().cloned().collect()
    }

    /// Returns the identities of all active parts in key order.
    #[must_use]
    pub fn get_part_infos(&self) -> Vec<PartInfo> {
        let parts = self.parts.lock();
        parts.keys().cloned().collect()
    }

    /// Returns the number of active parts.
    #[must_use]
    pub fn size(&self) -> usize {
        self.parts.lock().len()
    }

    /// Returns true if no part is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.lock().is_empty()
    }

    /// Returns the format version names are parsed with.
    #[must_use]
    pub const fn format_version(&self) -> FormatVersion {
        self.format_version
    }

    /// Returns a snapshot of the registry counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn parse(&self, name: &str) -> CoreResult<PartInfo> {
        PartInfo::parse(name, self.format_version).inspect_err(|_| self.stats.record_malformed())
    }

    fn insert_parsed(
        &self,
        index: &mut CoveringIndex<PartInfo, String>,
        info: PartInfo,
        name: String,
    ) -> AddOutcome {
        match index.insert(info, name) {
            InsertOutcome::Inserted { superseded } => {
                self.stats.record_added(superseded.len());
                let superseded: Vec<String> =
                    superseded.into_iter().map(|(_, name)| name).collect();
                if !superseded.is_empty() {
                    debug!(
                        count = superseded.len(),
                        parts = ?superseded,
                        "part supersedes active parts"
                    );
                }
                AddOutcome::Inserted { superseded }
            }
            InsertOutcome::Covered { key, value } => {
                self.stats.record_redundant();
                let by = index
                    .get_containing(&key)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default();
                trace!(part = %value, covered_by = %by, "part already covered");
                AddOutcome::Covered { by }
            }
        }
    }
}
