//! Core type definitions for partset.

use std::fmt;

/// Version of the part-name grammar a table was created with.
///
/// The version is opaque to the registry; it is passed through to the name
/// parser on every operation that accepts a part name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion(pub u32);

impl FormatVersion {
    /// Month-partitioned names: `{min_date}_{max_date}_{min}_{max}_{level}`.
    pub const LEGACY: Self = Self(0);

    /// Arbitrary partition ids: `{partition}_{min}_{max}_{level}[_{mutation}]`.
    pub const CUSTOM_PARTITIONING: Self = Self(1);

    /// Creates a format version.
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    /// Returns the raw version value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if names carry an explicit partition id.
    #[must_use]
    pub const fn has_custom_partitioning(self) -> bool {
        self.0 >= Self::CUSTOM_PARTITIONING.0
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::CUSTOM_PARTITIONING
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
