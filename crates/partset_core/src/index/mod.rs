//! Covering index.
//!
//! The registry keeps its parts in a [`CoveringIndex`]: an ordered map that
//! only ever holds the maximal entries under a covering relation. Keys
//! describe how they cover each other through the [`Covering`] trait, so the
//! index does not depend on the layout of a part identity.

mod covering;
mod traits;

pub use covering::{CoveringIndex, InsertOutcome};
pub use traits::Covering;
