//! Command to resolve a chain and emit the concatenated output.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fusectx::operations::{build, BuildOptions};
use std::path::PathBuf;

/// Resolve the full dependency chain and generate the final context.
#[derive(Args)]
pub struct BuildCommand {
    /// Entry file to resolve
    #[arg(value_name = "SOURCE_FILE")]
    pub source: PathBuf,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub silent: bool,
}

impl BuildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = BuildOptions::new(self.source).with_output(self.output);
        let result = build(&options).map_err(CliError::from)?;

        match result.output_written {
            Some(path) => {
                if !self.silent && !global.quiet {
                    println!("Output written to {}", path.display());
                }
            }
            None => println!("{}", result.content),
        }

        Ok(())
    }
}
