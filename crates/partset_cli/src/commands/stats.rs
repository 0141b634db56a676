//! Stats command implementation.

use crate::source::LoadedSet;
use serde::Serialize;

/// Registry statistics report.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Names read from the source.
    pub names_read: usize,
    /// Parts currently active.
    pub active: usize,
    /// Parts superseded by a later part while loading.
    pub superseded: u64,
    /// Names absorbed because an active part already covered them.
    pub redundant: u64,
    /// Names skipped as malformed.
    pub malformed: u64,
}

impl StatsReport {
    /// Builds a report from a loaded registry.
    pub fn from_loaded(loaded: &LoadedSet) -> Self {
        let stats = loaded.set.stats();
        Self {
            names_read: loaded.names_read,
            active: loaded.set.size(),
            superseded: stats.parts_superseded,
            redundant: stats.redundant_adds,
            malformed: stats.malformed_names,
        }
    }
}

/// Runs the stats command.
pub fn run(loaded: &LoadedSet, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let report = StatsReport::from_loaded(loaded);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("Part Registry Statistics:");
            println!("  Names read:  {}", report.names_read);
            println!("  Active:      {}", report.active);
            println!("  Superseded:  {}", report.superseded);
            println!("  Redundant:   {}", report.redundant);
            println!("  Malformed:   {}", report.malformed);
        }
    }

    Ok(())
}
