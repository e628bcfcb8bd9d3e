#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fusectx
//!
//! A library for resolving dependency chains among hierarchical context
//! files and concatenating them into a single output.
//!
//! Each file may declare one parent (`extends`) and an ordered list of
//! peers (`includes`) in a YAML frontmatter block. Resolution walks that
//! graph depth-first, detecting cycles, and combines the text in a fixed
//! precedence order: parent content, then peers in declared order, then
//! the file's own body.
//!
//! ## Core Types
//!
//! - [`header::Header`]: parsed frontmatter of one file
//! - [`ResolutionContext`]: cycle-detection state of one resolution
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fusectx::header;
//!
//! let text = "---\nextends: base.md\nincludes:\n  - shared.md\n---\n# Body";
//! let (header, body) = header::parse(text).unwrap();
//! assert_eq!(header.parent(), Some("base.md"));
//! assert_eq!(header.peers(), ["shared.md"]);
//! assert_eq!(body, "# Body");
//! ```

pub mod config;
pub mod error;
pub mod header;
pub mod logging;
pub mod operations;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use header::Header;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    build, build_all, clean, scaffold, BuildAllOptions, BuildAllResult, BuildOptions, BuildResult,
    CleanOptions, CleanResult, ScaffoldOptions, ScaffoldResult,
};
pub use resolver::{dependency_chain, resolve, validate, ResolutionContext};
