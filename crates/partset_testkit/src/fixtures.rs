//! Test fixtures and registry helpers.
//!
//! Provides part-name builders, a temporary part directory, and an invariant
//! checker for [`ActivePartSet`].

use partset_core::{ActivePartSet, FormatVersion, PartInfo};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds a custom-partitioning part name.
pub fn part_name(partition: &str, min_block: i64, max_block: i64, level: u32) -> String {
    PartInfo::new(partition, min_block, max_block, level).part_name()
}

/// Builds a custom-partitioning part name with a mutation version.
pub fn mutated_part_name(
    partition: &str,
    min_block: i64,
    max_block: i64,
    level: u32,
    mutation: i64,
) -> String {
    PartInfo::new(partition, min_block, max_block, level)
        .with_mutation(mutation)
        .part_name()
}

/// Creates a registry over custom-partitioning names.
///
/// # Panics
///
/// Panics if any name is malformed.
pub fn active_set(names: &[&str]) -> ActivePartSet {
    ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, names.iter().copied())
        .expect("Failed to build active part set")
}

/// Parses a custom-partitioning part name.
///
/// # Panics
///
/// Panics if the name is malformed.
pub fn info(name: &str) -> PartInfo {
    PartInfo::parse(name, FormatVersion::CUSTOM_PARTITIONING).expect("Malformed part name")
}

/// Checks the registry invariants, returning a description of the first
/// violation.
///
/// - no active part contains another
/// - `size()` matches the listing
/// - the listing is in ascending key order
pub fn check_invariants(set: &ActivePartSet) -> Result<(), String> {
    let infos = set.get_part_infos();
    let names = set.get_parts();

    if infos.len() != names.len() || set.size() != names.len() {
        return Err(format!(
            "size mismatch: size() = {}, names = {}, infos = {}",
            set.size(),
            names.len(),
            infos.len()
        ));
    }

    if let Some(pair) = infos.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(format!("listing out of order: {} before {}", pair[0], pair[1]));
    }

    for (i, a) in infos.iter().enumerate() {
        for b in &infos[i + 1..] {
            if a.contains(b) || b.contains(a) {
                return Err(format!("{a} and {b} are both active"));
            }
        }
    }

    Ok(())
}

/// A temporary table directory populated with part subdirectories.
pub struct PartDir {
    temp_dir: TempDir,
}

impl PartDir {
    /// Creates a directory holding one subdirectory per name.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn new(names: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in names {
            fs::create_dir(temp_dir.path().join(name)).expect("Failed to create part directory");
        }
        Self { temp_dir }
    }

    /// Adds a plain file, which part listings should ignore.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn with_file(self, name: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), b"").expect("Failed to create file");
        self
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_builders() {
        assert_eq!(part_name("all", 1, 4, 2), "all_1_4_2");
        assert_eq!(mutated_part_name("all", 1, 4, 2, 9), "all_1_4_2_9");
        assert_eq!(mutated_part_name("all", 1, 4, 2, 0), "all_1_4_2");
    }

    #[test]
    fn invariants_hold_for_fresh_set() {
        let set = active_set(&["p_1_1_0", "p_2_2_0", "p_1_2_1", "q_5_5_0"]);
        assert_eq!(check_invariants(&set), Ok(()));
    }

    #[test]
    fn part_dir_layout() {
        let dir = PartDir::new(&["p_1_1_0", "detached"]).with_file("format_version.txt");
        assert!(dir.path().join("p_1_1_0").is_dir());
        assert!(dir.path().join("format_version.txt").is_file());
    }
}
