//! Runtime configuration I/O operations.
//!
//! System directory detection and config loading. Only `main` should call
//! `DirectoryContext::from_system`; everything else receives the context by
//! parameter so tests can point it at a temp directory.

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory paths for editor configuration and diagnostics
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Config directory, e.g. ~/.config/jot on Linux
    pub config_dir: PathBuf,

    /// Directory for the default log file
    pub log_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join("jot");

        Ok(Self {
            config_dir,
            log_dir: std::env::temp_dir(),
        })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            config_dir: temp_dir.join("config"),
            log_dir: temp_dir.join("logs"),
        }
    }

    /// Path of the user config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Default path for the diagnostics log
    pub fn default_log_path(&self) -> PathBuf {
        self.log_dir.join("jot.log")
    }
}

/// Resolve the effective configuration
///
/// An explicit path wins over the user config file. A missing user config
/// silently yields defaults; an unreadable or invalid file is logged and
/// also yields defaults so the editor still starts.
pub fn load_config(explicit: Option<&Path>, dir_context: &DirectoryContext) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = dir_context.config_path();
            if !path.exists() {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Config::default();
            }
            path
        }
    };

    match Config::load_from_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load config from {}: {}, using defaults",
                path.display(),
                e
            );
            Config::default()
        }
    }
}
