//! Filesystem operations built on top of the resolver.
//!
//! Each operation follows the options-struct / result-struct pattern:
//! the caller builds an options value, the operation performs the work and
//! returns a result describing exactly what happened, and the CLI layer
//! formats that result for the terminal.
//!
//! - [`build`]: resolve one entry file, optionally writing the artifact
//! - [`build_all`]: discover and build every entry file under a directory
//! - [`scaffold`]: create a boilerplate entry file
//! - [`clean`]: delete previously generated artifacts

pub mod build;
pub mod build_all;
pub mod clean;
pub mod scaffold;

pub use build::{build, BuildOptions, BuildResult};
pub use build_all::{build_all, BuildAllOptions, BuildAllResult, BuildFailure, BuiltEntry};
pub use clean::{clean, CleanOptions, CleanResult};
pub use scaffold::{scaffold, ScaffoldOptions, ScaffoldResult};
