//! Command to remove previously generated artifacts.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_directory, GlobalOptions};
use clap::Args;
use fusectx::operations::{clean, CleanOptions};
use std::path::PathBuf;

/// Remove artifacts generated by `build` and `build-all`.
#[derive(Args)]
pub struct CleanCommand {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// List artifacts without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolve_directory(self.directory)?;

        let options = CleanOptions::new(root)
            .with_entry_file_name(config.entry_file_name().to_string())
            .with_output_extension(config.output_extension().to_string())
            .with_dry_run(self.dry_run);

        let result = clean(&options).map_err(CliError::from)?;

        if !global.quiet {
            for artifact in &result.removed {
                if self.dry_run {
                    println!("Would remove {}", artifact.display());
                } else {
                    println!("Removed {}", artifact.display());
                }
            }

            if result.removed.is_empty() {
                println!("No generated artifacts found");
            }
        }

        Ok(())
    }
}
