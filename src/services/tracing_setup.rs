//! Diagnostic logging to a file
//!
//! The terminal belongs to the editor while it runs, so all tracing output
//! goes to a log file instead of stderr. Filtering follows `RUST_LOG` and
//! falls back to `info`.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn open_log_file(log_file: &Path) -> Result<File> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_file`
///
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn init_global(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter())
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!("logging to {}", log_file.display());
    Ok(())
}
