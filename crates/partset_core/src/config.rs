//! Registry configuration.

use crate::types::FormatVersion;

/// Configuration for building an [`ActivePartSet`](crate::ActivePartSet).
#[derive(Debug, Clone)]
pub struct Config {
    /// Part-name grammar used to parse every name handed to the registry.
    pub format_version: FormatVersion,

    /// Whether malformed names in the seed list are skipped instead of
    /// failing construction.
    ///
    /// Directory listings routinely contain entries that are not parts
    /// (`detached`, `tmp_merge_*`, ...). Names passed to
    /// [`add`](crate::ActivePartSet::add) after construction are always
    /// parsed strictly.
    pub skip_malformed_on_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format_version: FormatVersion::CUSTOM_PARTITIONING,
            skip_malformed_on_seed: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the part-name format version.
    #[must_use]
    pub const fn format_version(mut self, version: FormatVersion) -> Self {
        self.format_version = version;
        self
    }

    /// Sets whether malformed seed names are skipped.
    #[must_use]
    pub const fn skip_malformed_on_seed(mut self, value: bool) -> Self {
        self.skip_malformed_on_seed = value;
        self
    }
}
