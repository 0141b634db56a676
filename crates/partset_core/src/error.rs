//! Error types for partset core.

use crate::types::FormatVersion;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in partset core operations.
///
/// Every registry operation is total once a name has been parsed, so the
/// only failure is a name that does not follow the part-name grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A part name could not be parsed under the given format version.
    #[error("malformed part name {name:?} (format version {format_version}): {reason}")]
    MalformedPartName {
        /// The offending name.
        name: String,
        /// Format version the name was parsed against.
        format_version: FormatVersion,
        /// Which part of the grammar was violated.
        reason: ParseErrorKind,
    },
}

impl CoreError {
    /// Creates a malformed part name error.
    pub fn malformed(
        name: impl Into<String>,
        format_version: FormatVersion,
        reason: ParseErrorKind,
    ) -> Self {
        Self::MalformedPartName {
            name: name.into(),
            format_version,
            reason,
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MalformedPartName { name, .. } => name,
        }
    }

    /// Returns the reason the name was rejected.
    #[must_use]
    pub fn reason(&self) -> &ParseErrorKind {
        match self {
            Self::MalformedPartName { reason, .. } => reason,
        }
    }
}

/// The grammar rule a malformed part name violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Wrong number of `_`-separated fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Accepted field counts, human readable.
        expected: &'static str,
        /// Number of fields present.
        found: usize,
    },

    /// Partition id is empty or contains characters outside `[A-Za-z0-9-]`.
    #[error("invalid partition id {0:?}")]
    PartitionId(String),

    /// A date field is not a valid `YYYYMMDD` value.
    #[error("invalid date {0:?}")]
    Date(String),

    /// Min and max dates of a legacy name fall in different months.
    #[error("min date {min} and max date {max} are in different months")]
    DateMonthMismatch {
        /// Min date field.
        min: String,
        /// Max date field.
        max: String,
    },

    /// A numeric field could not be parsed.
    #[error("invalid {field} {value:?}")]
    Number {
        /// Field name (`min block`, `level`, ...).
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// The block range is inverted.
    #[error("min block {min} is greater than max block {max}")]
    InvertedRange {
        /// Parsed min block.
        min: i64,
        /// Parsed max block.
        max: i64,
    },
}
