//! Batch build operation.
//!
//! Walks a directory tree, finds every entry file by name, and builds each
//! one with its own fresh resolution context, writing the artifact next to
//! the entry. A failing entry is recorded and the batch continues; the
//! caller decides how to report partial failure.

use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::{DEFAULT_ENTRY_FILE_NAME, DEFAULT_OUTPUT_EXTENSION};
use crate::error::{Error, Result};
use crate::resolver;

/// Options for a batch build.
#[derive(Debug, Clone)]
pub struct BuildAllOptions {
    /// Root directory to scan.
    pub root: PathBuf,
    /// File name identifying chain entry points.
    pub entry_file_name: String,
    /// Extension for generated artifacts.
    pub output_extension: String,
}

impl BuildAllOptions {
    /// Creates batch options for a root directory with default naming.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entry_file_name: DEFAULT_ENTRY_FILE_NAME.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
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
}

/// One successfully built entry.
#[derive(Debug)]
pub struct BuiltEntry {
    /// The entry file that was resolved.
    pub source: PathBuf,
    /// The artifact that was written.
    pub artifact: PathBuf,
}

/// One entry that failed to build.
#[derive(Debug)]
pub struct BuildFailure {
    /// The entry file that failed.
    pub source: PathBuf,
    /// Why it failed.
    pub error: Error,
}

/// Result of a batch build.
#[derive(Debug, Default)]
pub struct BuildAllResult {
    /// Entries built successfully, in discovery order.
    pub built: Vec<BuiltEntry>,
    /// Entries that failed, in discovery order.
    pub failures: Vec<BuildFailure>,
}

impl BuildAllResult {
    /// Returns true if any entry failed to build.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if no entry files were found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.built.is_empty() && self.failures.is_empty()
    }
}

/// Discovers entry files under the root, sorted by path for deterministic
/// output.
fn find_entry_files(options: &BuildAllOptions) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(&options.root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file()
            && entry.file_name() == std::ffi::OsStr::new(&options.entry_file_name)
        {
            entries.push(entry.into_path());
        }
    }

    Ok(entries)
}

/// Builds every entry file under the root directory.
///
/// Each entry resolves with a fresh context, so one broken chain cannot
/// poison another. Resolution and artifact-write failures are collected
/// per entry; only a failure to walk the tree itself aborts the batch.
///
/// # Errors
///
/// Returns an error if the directory tree cannot be traversed.
///
/// # Examples
///
/// ```no_run
/// use fusectx::operations::{build_all, BuildAllOptions};
/// use std::path::PathBuf;
///
/// let result = build_all(&BuildAllOptions::new(PathBuf::from("."))).unwrap();
/// for entry in &result.built {
///     println!("built {}", entry.artifact.display());
/// }
/// ```
pub fn build_all(options: &BuildAllOptions) -> Result<BuildAllResult> {
    let mut result = BuildAllResult::default();

    for source in find_entry_files(options)? {
        log::debug!("building {}", source.display());
        let artifact = source.with_extension(&options.output_extension);

        let outcome = resolver::resolve(&source)
            .and_then(|content| fs::write(&artifact, content).map_err(Error::from));

        match outcome {
            Ok(()) => result.built.push(BuiltEntry {
                source,
                artifact,
            }),
            Err(error) => result.failures.push(BuildFailure { source, error }),
        }
    }

    Ok(result)
}
