//! Command to find and build every entry file under a directory.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_directory, GlobalOptions};
use clap::Args;
use fusectx::operations::{build_all, BuildAllOptions};
use std::path::PathBuf;

/// Scan a directory to find and build all entry files.
#[derive(Args)]
pub struct BuildAllCommand {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub silent: bool,
}

impl BuildAllCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolve_directory(self.directory)?;
        let silent = self.silent || global.quiet;

        let options = BuildAllOptions::new(root)
            .with_entry_file_name(config.entry_file_name().to_string())
            .with_output_extension(config.output_extension().to_string());

        let result = build_all(&options).map_err(CliError::from)?;

        if result.is_empty() {
            if !silent {
                println!("No {} files found", config.entry_file_name());
            }
            return Ok(());
        }

        for entry in &result.built {
            if !silent {
                println!("Built {}", entry.source.display());
                println!("Output written to {}", entry.artifact.display());
            }
        }

        for failure in &result.failures {
            eprintln!("Failed to build {}: {}", failure.source.display(), failure.error);
        }

        if result.has_failures() {
            return Err(CliError::SemanticFailure(format!(
                "{} file(s) failed to build",
                result.failures.len()
            )));
        }

        Ok(())
    }
}
