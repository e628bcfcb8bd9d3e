//! Build script for fusectx-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("fusectx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and concatenate hierarchical context files")
        .long_about(
            "Command-line tool for resolving dependency chains of context files \
             declared through YAML frontmatter",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the configuration file location")
                .value_name("PATH")
                .global(true)
                .env("FUSECTX_CONFIG"),
        )
        .subcommands(vec![
            Command::new("build")
                .about("Resolve the full dependency chain and generate the final context")
                .long_about(
                    "Resolve an entry file's extends/includes chain and print or write the result",
                ),
            Command::new("validate")
                .about("Check the entire dependency chain for errors")
                .long_about("Validate a chain without generating output; optionally show it"),
            Command::new("init")
                .about("Create a boilerplate entry file to initialize a project")
                .long_about("Write a starter entry file with optional extends/includes references"),
            Command::new("build-all")
                .about("Scan a directory to find and build all entry files")
                .long_about("Build every entry file under a directory, continuing past failures"),
            Command::new("clean")
                .about("Remove previously generated artifacts")
                .long_about("Delete the artifacts that build and build-all wrote next to entries"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main fusectx.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("fusectx.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
