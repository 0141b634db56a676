//! Covered-by command implementation.

use partset_core::{ActivePartSet, PartInfo};
use serde::Serialize;

/// Parts covered by a query part.
#[derive(Debug, Serialize)]
pub struct CoveredListing {
    /// The queried part.
    pub part: String,
    /// Active parts inside its range, in key order.
    pub covered: Vec<String>,
}

/// Runs the covered-by command.
pub fn run(set: &ActivePartSet, part: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let info = PartInfo::parse(part, set.format_version())?;
    let listing = CoveredListing {
        part: part.to_string(),
        covered: set.get_parts_covered_by(&info),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        _ => {
            if listing.covered.is_empty() {
                println!("No active parts inside {part}");
            }
            for name in &listing.covered {
                println!("{name}");
            }
        }
    }

    Ok(())
}
