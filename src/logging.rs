//! Logger setup
//!
//! `RUST_LOG` controls the filter as usual. The TUI owns the terminal, so it only
//! logs when a file is given.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Where log records go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// No logger is installed
    Disabled,
    /// Write to stderr with `default_filter` unless `RUST_LOG` says otherwise
    Stderr { default_filter: &'a str },
    /// Write to a file, default filter `info`
    File(&'a Path),
}

/// Install the global logger
///
/// # Errors
/// Fails if the log file cannot be created or a logger is already installed.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let mut builder = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr { default_filter } => {
            let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
            builder.target(Target::Stderr).format_timestamp(None);
            builder
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder
                .target(Target::Pipe(Box::new(file)))
                .format_timestamp_millis();
            builder
        }
    };

    builder.try_init().context("Logger already initialized")?;
    log::debug!("Logging initialized ({target:?})");
    Ok(())
}
