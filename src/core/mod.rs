//! Core types for micoo.
//!
//! This module contains the fundamental data structures used throughout
//! the application: configuration, the cookbook repository, and the fixed
//! menu of output locations.

mod config;
mod cookbook;
mod location;

pub use config::{Config, LoggingConfig, RepositoryConfig, LOCAL_CONFIG_FILE};
pub use cookbook::{validate_name, Cookbook, Repository};
pub use location::{location_labels, path_from_label, OutputLocation, OUTPUT_LOCATIONS};
