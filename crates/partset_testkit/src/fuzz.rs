//! Fuzz testing harnesses for PartSet.
//!
//! This module provides fuzz targets that can be used with cargo-fuzz
//! or other fuzzing frameworks.

use crate::fixtures::check_invariants;
use partset_core::{ActivePartSet, FormatVersion, PartInfo};

/// Fuzz target for part name parsing.
///
/// Arbitrary input must either fail to parse or parse to an identity whose
/// canonical name parses back to the same identity.
pub fn fuzz_part_name(data: &[u8]) {
    let name = String::from_utf8_lossy(data);

    let _ = PartInfo::parse(&name, FormatVersion::LEGACY);

    if let Ok(info) = PartInfo::parse(&name, FormatVersion::CUSTOM_PARTITIONING) {
        let reparsed = PartInfo::parse(&info.part_name(), FormatVersion::CUSTOM_PARTITIONING)
            .expect("Canonical name must parse");
        assert_eq!(info, reparsed, "Canonical name changed identity");
    }
}

/// Fuzz target for registry operations.
///
/// Bytes are decoded as 4-byte operations over a single partition with
/// blocks aligned to power-of-two boundaries, which keeps every generated
/// part nested or disjoint. The registry invariants must hold after each
/// operation.
pub fn fuzz_registry_operations(data: &[u8]) {
    let set = ActivePartSet::empty(FormatVersion::CUSTOM_PARTITIONING);

    for chunk in data.chunks_exact(4) {
        let op = chunk[0] % 3;
        let shift = u32::from(chunk[1] % 6);
        let slot = i64::from(chunk[2] % 32);
        let mutation = i64::from(chunk[3] % 4);

        // Aligned block of width 2^shift inside 0..64.
        let width = 1i64 << shift;
        let min = (slot * width) % 64;
        let info = PartInfo::new("p", min, min + width - 1, shift).with_mutation(mutation);

        match op {
            0 => {
                let _ = set.add(info.part_name());
            }
            1 => {
                let _ = set.get_containing_part(&info.part_name());
            }
            _ => {
                let _ = set.get_parts_covered_by(&info);
            }
        }

        if let Err(violation) = check_invariants(&set) {
            panic!("invariant violated: {violation}");
        }
    }
}
