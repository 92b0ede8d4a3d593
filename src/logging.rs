//! Log subscriber setup.
//!
//! Everything at the configured level goes to the log file; only errors are
//! echoed to stderr so they do not get in the way of the prompts.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::LoggingConfig;

/// Where log output ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// File plus errors on stderr.
    File,
    /// The log file could not be opened; stderr only.
    StderrOnly,
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<LogTarget> {
    let level = if verbose { "debug" } else { config.level.as_str() };

    let (file_layer, target) = match open_log_file(&config.file) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(EnvFilter::new(level)),
            ),
            LogTarget::File,
        ),
        Err(_) => (None, LogTarget::StderrOnly),
    };

    let stderr_level = match (verbose, target) {
        (true, _) => LevelFilter::DEBUG,
        (false, LogTarget::StderrOnly) => LevelFilter::WARN,
        (false, LogTarget::File) => LevelFilter::ERROR,
    };
    let stderr_layer =
        fmt::layer().with_writer(io::stderr).with_target(false).with_filter(stderr_level);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    if target == LogTarget::StderrOnly {
        tracing::warn!(path = %config.file.display(), "log file unavailable, logging to stderr");
    }

    Ok(target)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
