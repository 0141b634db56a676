//! Part identities.
//!
//! A part is an immutable data segment identified by its partition, the
//! closed range of block numbers it holds, how many merges produced it and
//! which mutation last rewrote it. [`PartInfo`] is that identity together
//! with the covering relation the registry maintains its invariant over.

mod info;
mod name;

pub use info::PartInfo;
