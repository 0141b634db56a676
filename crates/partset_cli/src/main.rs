//! PartSet CLI
//!
//! Command-line tools for inspecting the active parts of a merge-tree table.
//!
//! # Commands
//!
//! - `active` - List the parts a reader should consult
//! - `containing` - Show the active part that covers a given part
//! - `covered-by` - List the active parts inside a given part's range
//! - `stats` - Summarize how many parts were superseded or rejected

mod commands;
mod source;

use clap::{Parser, Subcommand};
use partset_core::FormatVersion;
use source::SourceArgs;
use tracing_subscriber::EnvFilter;

/// PartSet command-line part registry tools.
#[derive(Parser)]
#[command(name = "partset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Part name format version (0 = legacy month partitioning)
    #[arg(global = true, short = 'F', long, default_value_t = 1)]
    format_version: u32,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active parts in order
    Active {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the active part containing a part
    Containing {
        /// Part name to look up
        part: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List active parts covered by a part
    CoveredBy {
        /// Part name whose range is queried
        part: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show registry statistics
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let format_version = FormatVersion::new(cli.format_version);

    match cli.command {
        Commands::Active { source, format } => {
            let loaded = source.load(format_version)?;
            commands::active::run(&loaded.set, &format)?;
        }
        Commands::Containing { part, source } => {
            let loaded = source.load(format_version)?;
            commands::containing::run(&loaded.set, &part)?;
        }
        Commands::CoveredBy {
            part,
            source,
            format,
        } => {
            let loaded = source.load(format_version)?;
            commands::covered_by::run(&loaded.set, &part, &format)?;
        }
        Commands::Stats { source, format } => {
            let loaded = source.load(format_version)?;
            commands::stats::run(&loaded, &format)?;
        }
        Commands::Version => {
            println!("PartSet CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("PartSet Core v{}", partset_core::VERSION);
        }
    }

    Ok(())
}
