//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `build`: resolve a chain and emit the concatenated output
//! - `validate`: check a chain for errors without generating output
//! - `init`: create a boilerplate entry file
//! - `build_all`: find and build every entry file under a directory
//! - `clean`: remove previously generated artifacts
//! - `completions`: generate shell completion scripts

pub mod build;
pub mod build_all;
pub mod clean;
pub mod completions;
pub mod init;
pub mod validate;

pub use build::BuildCommand;
pub use build_all::BuildAllCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;
