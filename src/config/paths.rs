//! Path management for VibePay
//!
//! ## Path Resolution Order
//!
//! 1. `VIBEPAY_DATA_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/vibepay` (if set)
//! 3. The platform config directory (`~/.config/vibepay` on Linux,
//!    `%APPDATA%\vibepay` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VibepayError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "VIBEPAY_DATA_DIR";

/// Manages all paths used by VibePay
#[derive(Debug, Clone)]
pub struct VibepayPaths {
    base_dir: PathBuf,
}

impl VibepayPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, VibepayError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VibepayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value store files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), VibepayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VibepayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| VibepayError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, VibepayError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("vibepay"));
        }
    }

    ProjectDirs::from("", "", "vibepay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VibepayError::Config("Could not determine a config directory".into()))
}
