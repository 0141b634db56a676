//! CLI command implementations.

pub mod active;
pub mod containing;
pub mod covered_by;
pub mod stats;
