//! Utility functions for CLI operations.
//!
//! This module provides the global options shared across commands and the
//! configuration loading helper.

use crate::error::CliError;
use fusectx::{Config, ConfigBuilder};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

/// Load the merged configuration.
///
/// Uses the `--config` override when given, otherwise the default config
/// file location; environment variables take precedence either way.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_path(path.clone());
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve a directory argument, defaulting to the current directory.
pub fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match directory {
        Some(dir) => Ok(dir),
        None => env::current_dir().map_err(CliError::from),
    }
}
