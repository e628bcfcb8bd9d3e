//! Command to validate a dependency chain without generating output.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use fusectx::resolver;
use std::path::PathBuf;

/// Check the entire dependency chain for errors.
#[derive(Args)]
pub struct ValidateCommand {
    /// Entry file to validate
    #[arg(value_name = "SOURCE_FILE")]
    pub source: PathBuf,

    /// Show the dependency chain after successful validation
    #[arg(long)]
    pub show_chain: bool,

    /// Output format for the chain listing
    #[arg(long, value_enum, default_value = "text")]
    pub format: ChainFormat,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for `--show-chain`.
#[derive(Clone, Copy, ValueEnum)]
pub enum ChainFormat {
    Text,
    Json,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let quiet = self.quiet || global.quiet;

        if let Err(e) = resolver::validate(&self.source) {
            if !quiet {
                eprintln!("Validation failed: {e}");
            }
            return Err(CliError::SemanticFailure(
                "Dependency chain is invalid".to_string(),
            ));
        }

        if self.show_chain {
            // Validation succeeded, so the chain traversal cannot cycle;
            // remaining failures (I/O races) still propagate.
            let chain = resolver::dependency_chain(&self.source).map_err(CliError::from)?;

            match self.format {
                ChainFormat::Text => {
                    println!("Dependency chain:");
                    for (i, file) in chain.iter().enumerate() {
                        println!("{}. {}", i + 1, file.display());
                    }
                }
                ChainFormat::Json => {
                    let paths: Vec<String> =
                        chain.iter().map(|p| p.display().to_string()).collect();
                    let json = serde_json::to_string_pretty(&paths).map_err(|e| {
                        CliError::Config(format!("JSON serialization failed: {e}"))
                    })?;
                    println!("{json}");
                }
            }
        }

        if !quiet {
            println!("Validation successful");
        }
        Ok(())
    }
}
