//! # PartSet Core
//!
//! Registry of active data parts for merge-tree storage engines.
//!
//! Parts are immutable segments identified by a partition, a closed range of
//! block numbers, a merge level and a mutation version. Merges and mutations
//! produce new parts that supersede the ones they were built from. This crate
//! tracks which parts are still active:
//!
//! - [`PartInfo`]: part identity, name grammar and covering relation
//! - [`CoveringIndex`]: ordered map that keeps only maximal entries
//! - [`ActivePartSet`]: thread-safe registry over the index
//!
//! ## Example
//!
//! ```rust,ignore
//! use partset_core::{ActivePartSet, FormatVersion};
//!
//! let parts = ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, ["all_1_1_0", "all_2_2_0"])?;
//! parts.add("all_1_2_1")?;
//!
//! assert_eq!(parts.get_parts(), vec!["all_1_2_1"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod active_set;
mod config;
mod error;
pub mod index;
mod part;
mod stats;
mod types;

pub use active_set::{ActivePartSet, AddOutcome};
pub use config::Config;
pub use error::{CoreError, CoreResult, ParseErrorKind};
pub use index::{Covering, CoveringIndex, InsertOutcome};
pub use part::PartInfo;
pub use stats::{ActiveSetStats, StatsSnapshot};
pub use types::FormatVersion;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
