//! Containing command implementation.

use partset_core::ActivePartSet;

/// Runs the containing command.
pub fn run(set: &ActivePartSet, part: &str) -> Result<(), Box<dyn std::error::Error>> {
    match set.get_containing_part(part)? {
        Some(name) if name == part => println!("{part} is active"),
        Some(name) => println!("{part} is covered by {name}"),
        None => println!("No active part contains {part}"),
    }
    Ok(())
}
