//! Main entry point for the fusectx CLI.
//!
//! This is the command-line interface for resolving dependency chains of
//! context files. It provides commands for working with entry files:
//! - `build`: resolve a chain and emit the concatenated output
//! - `validate`: check a chain for errors without producing output
//! - `init`: create a boilerplate entry file
//! - `build-all`: find and build every entry file under a directory
//! - `clean`: remove previously generated artifacts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = fusectx::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Build(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::BuildAll(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
