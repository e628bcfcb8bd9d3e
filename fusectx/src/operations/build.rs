//! Single-entry build operation.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::resolver;

/// Options for building one entry file.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// The entry file to resolve.
    pub source: PathBuf,
    /// Destination for the resolved text; `None` leaves writing to the
    /// caller (the CLI prints to stdout).
    pub output: Option<PathBuf>,
}

impl BuildOptions {
    /// Creates build options for a source file.
    #[must_use]
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            output: None,
        }
    }

    /// Sets the output destination.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// The fully resolved text.
    pub content: String,
    /// Where the text was written, if an output path was given.
    pub output_written: Option<PathBuf>,
}

/// Resolves the source file's dependency chain and optionally writes the
/// result.
///
/// # Errors
///
/// Propagates any resolution error, and any I/O error from writing the
/// output file.
///
/// # Examples
///
/// ```no_run
/// use fusectx::operations::{build, BuildOptions};
/// use std::path::PathBuf;
///
/// let options = BuildOptions::new(PathBuf::from("fusectx.md"))
///     .with_output(Some(PathBuf::from("fusectx.ctx")));
/// let result = build(&options).unwrap();
/// assert!(result.output_written.is_some());
/// ```
pub fn build(options: &BuildOptions) -> Result<BuildResult> {
    let content = resolver::resolve(&options.source)?;

    let output_written = match &options.output {
        Some(path) => {
            fs::write(path, &content)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(BuildResult {
        content,
        output_written,
    })
}
