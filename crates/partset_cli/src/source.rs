//! Part name sources.
//!
//! Names come from a table directory (one subdirectory per part) or from a
//! text file with one name per line. Both may be given; directory entries
//! are read first.

use clap::Args;
use partset_core::{ActivePartSet, Config, CoreError, FormatVersion};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors while collecting part names.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither `--dir` nor `--names` was given.
    #[error("a part source is required: pass --dir and/or --names")]
    Missing,

    /// A source could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A name was malformed and lenient loading was off.
    #[error(transparent)]
    Malformed(#[from] CoreError),
}

/// Command-line options selecting where part names come from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Table directory whose subdirectories are parts
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// File with one part name per line (`#` starts a comment)
    #[arg(short, long)]
    pub names: Option<PathBuf>,

    /// Skip names that are not valid parts instead of failing
    #[arg(short, long)]
    pub lenient: bool,
}

/// A registry built from a source.
#[derive(Debug)]
pub struct LoadedSet {
    /// The populated registry.
    pub set: ActivePartSet,
    /// Number of names read from the source.
    pub names_read: usize,
}

impl SourceArgs {
    /// Reads all names and builds the registry.
    pub fn load(&self, format_version: FormatVersion) -> Result<LoadedSet, SourceError> {
        let names = self.read_names()?;
        let names_read = names.len();

        let config = Config::new()
            .format_version(format_version)
            .skip_malformed_on_seed(self.lenient);
        let set = ActivePartSet::with_config(&config, names)?;

        info!(names = names_read, active = set.size(), "loaded part names");
        Ok(LoadedSet { set, names_read })
    }

    fn read_names(&self) -> Result<Vec<String>, SourceError> {
        if self.dir.is_none() && self.names.is_none() {
            return Err(SourceError::Missing);
        }

        let mut names = Vec::new();
        if let Some(dir) = &self.dir {
            names.extend(read_dir_names(dir)?);
        }
        if let Some(path) = &self.names {
            names.extend(read_file_names(path)?);
        }
        Ok(names)
    }
}

/// Lists subdirectory names of `dir` in lexical order.
///
/// Plain files (checksums, format markers) are not parts and are skipped.
pub fn read_dir_names(dir: &Path) -> Result<Vec<String>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Reads one name per line, ignoring blank lines and `#` comments.
pub fn read_file_names(path: &Path) -> Result<Vec<String>, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
