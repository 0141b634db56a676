//! Active command implementation.

use partset_core::ActivePartSet;
use serde::Serialize;

/// Active part listing.
#[derive(Debug, Serialize)]
pub struct ActiveListing {
    /// Format version names were parsed with.
    pub format_version: u32,
    /// Number of active parts.
    pub count: usize,
    /// Active part names in key order.
    pub parts: Vec<String>,
}

/// Runs the active command.
pub fn run(set: &ActivePartSet, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parts = set.get_parts();
    let listing = ActiveListing {
        format_version: set.format_version().as_u32(),
        count: parts.len(),
        parts,
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        _ => {
            for name in &listing.parts {
                println!("{name}");
            }
        }
    }

    Ok(())
}
