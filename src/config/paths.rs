//! Path management for Utsav
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `UTSAV_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/utsav` or `~/.config/utsav`
//! 3. Windows: `%APPDATA%\utsav`

use std::path::PathBuf;

use crate::error::UtsavError;

/// Manages all paths used by Utsav
#[derive(Debug, Clone)]
pub struct UtsavPaths {
    /// Base directory for all Utsav data
    base_dir: PathBuf,
}

impl UtsavPaths {
    /// Create a new UtsavPaths instance
    ///
    /// Path resolution:
    /// 1. `UTSAV_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/utsav` or `~/.config/utsav`
    /// 3. Windows: `%APPDATA%\utsav`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, UtsavError> {
        let base_dir = if let Ok(custom) = std::env::var("UTSAV_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create UtsavPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/utsav/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/utsav/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to plans.json
    pub fn plans_file(&self) -> PathBuf {
        self.data_dir().join("plans.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), UtsavError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| UtsavError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| UtsavError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Utsav has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, UtsavError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("utsav"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, UtsavError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| UtsavError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("utsav"))
}
