//! Generated-artifact removal.
//!
//! An artifact is the file a build writes next to an entry file: same
//! stem, configured output extension. Clean walks the tree, finds entry
//! files, and removes their artifacts. Files with the output extension
//! but no sibling entry file are left alone; they were not generated by
//! this tool.

use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::{DEFAULT_ENTRY_FILE_NAME, DEFAULT_OUTPUT_EXTENSION};
use crate::error::Result;

/// Options for artifact cleanup.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Root directory to scan.
    pub root: PathBuf,
    /// File name identifying chain entry points.
    pub entry_file_name: String,
    /// Extension of generated artifacts.
    pub output_extension: String,
    /// List artifacts without deleting them.
    pub dry_run: bool,
}

impl CleanOptions {
    /// Creates clean options for a root directory with default naming.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entry_file_name: DEFAULT_ENTRY_FILE_NAME.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    /// Sets the entry file name to look for.
    #[must_use]
    pub fn with_entry_file_name(mut self, name: String) -> Self {
        self.entry_file_name = name;
        self
    }

    /// Sets the artifact extension.
    #[must_use]
    pub fn with_output_extension(mut self, extension: String) -> Self {
        self.output_extension = extension;
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a clean operation.
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Artifacts removed (or, in dry-run mode, that would be removed),
    /// in discovery order.
    pub removed: Vec<PathBuf>,
}

/// Removes the generated artifacts under the root directory.
///
/// # Errors
///
/// Returns an error if the tree cannot be traversed or an artifact cannot
/// be deleted.
///
/// # Examples
///
/// ```no_run
/// use fusectx::operations::{clean, CleanOptions};
/// use std::path::PathBuf;
///
/// let options = CleanOptions::new(PathBuf::from(".")).with_dry_run(true);
/// let result = clean(&options).unwrap();
/// println!("{} artifact(s)", result.removed.len());
/// ```
pub fn clean(options: &CleanOptions) -> Result<CleanResult> {
    let mut result = CleanResult::default();

    for entry in WalkDir::new(&options.root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file()
            || entry.file_name() != std::ffi::OsStr::new(&options.entry_file_name)
        {
            continue;
        }

        let artifact = entry.path().with_extension(&options.output_extension);
        if !artifact.exists() {
            continue;
        }

        if !options.dry_run {
            log::debug!("removing {}", artifact.display());
            fs::remove_file(&artifact)?;
        }
        result.removed.push(artifact);
    }

    Ok(result)
}
