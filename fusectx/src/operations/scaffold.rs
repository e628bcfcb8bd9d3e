//! Boilerplate entry-file creation.

use std::fs;
use std::path::PathBuf;

use crate::config::DEFAULT_ENTRY_FILE_NAME;
use crate::error::{Error, Result};

/// Options for scaffolding an entry file.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory to create the entry file in.
    pub dir: PathBuf,
    /// Optional parent reference to declare.
    pub extends: Option<String>,
    /// Peer references to declare, in order.
    pub includes: Vec<String>,
    /// Overwrite an existing entry file.
    pub force: bool,
    /// Name of the entry file to create.
    pub entry_file_name: String,
}

impl ScaffoldOptions {
    /// Creates scaffold options for a target directory.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            extends: None,
            includes: Vec::new(),
            force: false,
            entry_file_name: DEFAULT_ENTRY_FILE_NAME.to_string(),
        }
    }

    /// Sets the parent reference.
    #[must_use]
    pub fn with_extends(mut self, extends: Option<String>) -> Self {
        self.extends = extends;
        self
    }

    /// Sets the peer references.
    #[must_use]
    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    /// Sets whether to overwrite an existing file.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Sets the entry file name.
    #[must_use]
    pub fn with_entry_file_name(mut self, name: String) -> Self {
        self.entry_file_name = name;
        self
    }
}

/// Result of a scaffold operation.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Path of the created entry file.
    pub path: PathBuf,
    /// Whether the target directory had to be created.
    pub dir_created: bool,
}

/// Renders the boilerplate entry file content.
fn render(options: &ScaffoldOptions) -> String {
    let mut content = String::from("---\n");

    if let Some(extends) = &options.extends {
        content.push_str(&format!("extends: {extends}\n"));
    }

    if !options.includes.is_empty() {
        content.push_str("includes:\n");
        for include in &options.includes {
            content.push_str(&format!("  - {include}\n"));
        }
    }

    content.push_str("---\n\n# Project Context\n\nThis is a fusectx configuration file.\n");
    content
}

/// Creates a boilerplate entry file in the target directory.
///
/// The directory is created if missing. An existing entry file is never
/// overwritten unless `force` is set.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the file exists and `force` is false,
/// or an I/O error if the directory or file cannot be created.
///
/// # Examples
///
/// ```no_run
/// use fusectx::operations::{scaffold, ScaffoldOptions};
/// use std::path::PathBuf;
///
/// let options = ScaffoldOptions::new(PathBuf::from("."))
///     .with_extends(Some("../base.md".to_string()));
/// let result = scaffold(&options).unwrap();
/// println!("created {}", result.path.display());
/// ```
pub fn scaffold(options: &ScaffoldOptions) -> Result<ScaffoldResult> {
    let path = options.dir.join(&options.entry_file_name);

    if !options.force && path.exists() {
        return Err(Error::Validation {
            field: "target".to_string(),
            message: format!(
                "file {} already exists; use --force to overwrite",
                path.display()
            ),
        });
    }

    let dir_created = !options.dir.exists();
    fs::create_dir_all(&options.dir)?;
    fs::write(&path, render(options))?;

    Ok(ScaffoldResult { path, dir_created })
}
