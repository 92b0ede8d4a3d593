//! # micoo
//!
//! Pick a mise cookbook from your local repository and drop it into your
//! project.
//!
//! A cookbook is a ready-made mise configuration file. micoo lists the
//! cookbooks in a repository directory, lets you choose one and a
//! conventional location for it (`mise.toml`, `.config/mise/config.toml`, ...),
//! asks for confirmation, and copies the file verbatim.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive mode
//! micoo
//!
//! # List cookbooks, or write one without prompts
//! micoo list
//! micoo new python -o mise.toml
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]

pub mod core;
pub mod error;
pub mod interactive;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{Config, Cookbook, OutputLocation, Repository, OUTPUT_LOCATIONS};
pub use error::{MicooError, MicooResult};
pub use interactive::{RunOutcome, Workflow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "micoo";
