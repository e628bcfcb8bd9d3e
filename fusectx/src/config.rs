//! Configuration schema and loading.
//!
//! fusectx has two knobs: the entry file name that batch discovery looks
//! for, and the extension given to generated artifacts. Values are merged
//! from built-in defaults, an optional `config.yaml` in the config
//! directory, and `FUSECTX_*` environment variables, highest precedence
//! last.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default file name for chain entry points.
pub const DEFAULT_ENTRY_FILE_NAME: &str = "fusectx.md";

/// Default extension for generated artifacts.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "ctx";

/// Environment variable overriding the entry file name.
pub const ENV_ENTRY_FILE: &str = "FUSECTX_ENTRY_FILE";

/// Environment variable overriding the output extension.
pub const ENV_OUTPUT_EXT: &str = "FUSECTX_OUTPUT_EXT";

/// Complete configuration structure.
///
/// Absent fields fall back to the built-in defaults at read time, so a
/// config file only needs to name the settings it changes.
///
/// # Examples
///
/// ```
/// use fusectx::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.entry_file_name(), "fusectx.md");
/// assert_eq!(config.output_extension(), "ctx");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File name batch discovery looks for.
    pub entry_file_name: Option<String>,

    /// Extension of generated artifacts (without the leading dot).
    pub output_extension: Option<String>,
}

impl Config {
    /// The entry file name, or the built-in default.
    #[must_use]
    pub fn entry_file_name(&self) -> &str {
        self.entry_file_name
            .as_deref()
            .unwrap_or(DEFAULT_ENTRY_FILE_NAME)
    }

    /// The artifact extension, or the built-in default.
    #[must_use]
    pub fn output_extension(&self) -> &str {
        self.output_extension
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_EXTENSION)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the entry file name is empty or
    /// contains path separators, or if the output extension is empty or
    /// contains a dot or separator.
    pub fn validate(&self) -> Result<()> {
        let entry = self.entry_file_name();
        if entry.is_empty() || entry.contains('/') || entry.contains('\\') {
            return Err(Error::Validation {
                field: "entry_file_name".to_string(),
                message: format!("must be a bare file name, got '{entry}'"),
            });
        }

        let ext = self.output_extension();
        if ext.is_empty() || ext.contains('.') || ext.contains('/') || ext.contains('\\') {
            return Err(Error::Validation {
                field: "output_extension".to_string(),
                message: format!("must be an extension without a leading dot, got '{ext}'"),
            });
        }

        Ok(())
    }
}

/// Returns the default configuration directory, `~/.fusectx`.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".fusectx"))
}

/// Builder that merges configuration sources.
///
/// Precedence, lowest first: built-in defaults, the config file,
/// environment variables.
///
/// # Examples
///
/// ```
/// use fusectx::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert!(!config.entry_file_name().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder using the default config file location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the config file path (used by tests and `--config`).
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Loads and merges the configuration.
    ///
    /// A missing config file is not an error; a malformed one is.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let path = self
            .config_path
            .or_else(|| default_config_dir().map(|dir| dir.join("config.yaml")));

        let mut config = match path {
            Some(ref p) if p.exists() => {
                let contents = std::fs::read_to_string(p)?;
                serde_yaml::from_str(&contents)?
            }
            _ => Config::default(),
        };

        if let Ok(entry) = env::var(ENV_ENTRY_FILE) {
            if !entry.is_empty() {
                config.entry_file_name = Some(entry);
            }
        }
        if let Ok(ext) = env::var(ENV_OUTPUT_EXT) {
            if !ext.is_empty() {
                config.output_extension = Some(ext);
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Derives the artifact path for an entry file: same directory and stem,
/// configured extension.
///
/// # Examples
///
/// ```
/// use fusectx::config::{artifact_path, Config};
/// use std::path::Path;
///
/// let config = Config::default();
/// let artifact = artifact_path(Path::new("/project/fusectx.md"), &config);
/// assert_eq!(artifact, Path::new("/project/fusectx.ctx"));
/// ```
#[must_use]
pub fn artifact_path(entry: &Path, config: &Config) -> PathBuf {
    entry.with_extension(config.output_extension())
}
