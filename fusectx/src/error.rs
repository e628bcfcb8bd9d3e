//! Error types for the fusectx library.
//!
//! This module provides the error hierarchy for all resolution and
//! file-management operations, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a fusectx error.
///
/// # Examples
///
/// ```
/// use fusectx::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("resolved content".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fusectx library.
///
/// This enum encompasses all failure conditions that can occur while
/// resolving a dependency chain or managing its generated artifacts.
/// The first failure anywhere in a recursive resolution aborts the whole
/// resolution; there are no partial results.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be normalized to absolute form.
    #[error("cannot resolve path {}: {reason}", path.display())]
    PathResolution {
        /// The path that failed to normalize.
        path: PathBuf,
        /// The reason normalization failed.
        reason: String,
    },

    /// A file was referenced while it was already an active ancestor in
    /// the current resolution.
    #[error("circular dependency detected: {}", path.display())]
    CircularDependency {
        /// The path that closed the cycle.
        path: PathBuf,
    },

    /// The target file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The frontmatter block was present but malformed.
    #[error("invalid frontmatter in {}: {source}", path.display())]
    HeaderParse {
        /// The file containing the malformed frontmatter.
        path: PathBuf,
        /// The underlying YAML parse diagnostic.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred outside the resolver itself (artifact writes,
    /// directory walks).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An operation precondition failed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if this error is a circular dependency.
    ///
    /// # Examples
    ///
    /// ```
    /// use fusectx::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::CircularDependency { path: PathBuf::from("/a.md") };
    /// assert!(err.is_circular());
    /// ```
    #[must_use]
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularDependency { .. })
    }

    /// Check if this error indicates a referenced file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fusectx::Error;
    /// use std::path::PathBuf;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err = Error::FileAccess { path: PathBuf::from("/missing.md"), source: io };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Check if this error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    }
}
