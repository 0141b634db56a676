//! # PartSet Testkit
//!
//! Test utilities for PartSet.
//!
//! This crate provides:
//! - Part-name fixtures, temporary part directories and an invariant checker
//! - Property-based test generators using proptest, including a merge
//!   history simulator that produces realistic, properly nested parts
//! - Fuzz testing harnesses
//! - Concurrent stress testing utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use partset_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn converges((history, names) in shuffled_history_strategy(64)) {
//!         let set = ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, names).unwrap();
//!         prop_assert_eq!(set.get_parts(), history.active_names());
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use partset_core::{ActivePartSet, AddOutcome, FormatVersion, PartInfo};
    pub use proptest::prelude::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use stress::*;
