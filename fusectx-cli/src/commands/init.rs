//! Init command implementation.
//!
//! This module implements the `init` command for creating a boilerplate
//! entry file in a target directory.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_directory, GlobalOptions};
use clap::Args;
use fusectx::operations::{scaffold, ScaffoldOptions};
use std::path::PathBuf;

/// Create a boilerplate entry file to initialize a project.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to initialize (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Parent file the new entry should extend
    #[arg(short, long, value_name = "PATH")]
    pub extends: Option<String>,

    /// Peer files the new entry should include (repeatable)
    #[arg(short, long = "includes", value_name = "PATH")]
    pub includes: Vec<String>,

    /// Overwrite an existing entry file
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = resolve_directory(self.directory)?;

        let options = ScaffoldOptions::new(dir)
            .with_extends(self.extends)
            .with_includes(self.includes)
            .with_force(self.force)
            .with_entry_file_name(config.entry_file_name().to_string());

        let result = scaffold(&options).map_err(CliError::from)?;

        if !global.quiet {
            println!("Created {}", result.path.display());
        }
        Ok(())
    }
}
