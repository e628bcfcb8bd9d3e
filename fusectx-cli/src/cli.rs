//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BuildAllCommand, BuildCommand, CleanCommand, CompletionsCommand, InitCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving dependency chains of context files.
#[derive(Parser)]
#[command(name = "fusectx")]
#[command(
    version,
    about = "Resolve and concatenate hierarchical context files",
    long_about = "fusectx recursively resolves a dependency chain of text files and \
                  concatenates them into a single output. It supports both inheritance \
                  (extends) and composition (includes) through YAML frontmatter."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration file location
    #[arg(long, value_name = "PATH", global = true, env = "FUSECTX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the full dependency chain and generate the final context
    Build(BuildCommand),

    /// Check the entire dependency chain for errors without generating output
    Validate(ValidateCommand),

    /// Create a boilerplate entry file to initialize a project
    Init(InitCommand),

    /// Scan a directory to find and build all entry files
    #[command(name = "build-all")]
    BuildAll(BuildAllCommand),

    /// Remove previously generated artifacts
    Clean(CleanCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
