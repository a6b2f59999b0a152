//! Path management for the phonebook
//!
//! Resolves where the settings, audit log and CSV data files live.
//!
//! ## Path Resolution Order
//!
//! 1. `PHONEBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `phonebook-cli`
//!    (`~/.config/phonebook-cli` on Linux, `%APPDATA%\phonebook-cli\config` on Windows)
//! 3. `./.phonebook` when no home directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PhonebookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PHONEBOOK_DATA_DIR";

/// Manages all paths used by the phonebook
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// Base directory for all phonebook data
    base_dir: PathBuf,
}

impl PhonebookPaths {
    /// Create a new PhonebookPaths instance using the resolution order above
    pub fn new() -> Result<Self, PhonebookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Ok(Self { base_dir })
    }

    /// Create PhonebookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the CSV files
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

    /// Get the path to credentials.csv
    pub fn credentials_file(&self) -> PathBuf {
        self.data_dir().join("credentials.csv")
    }

    /// Get the path to contacts.csv
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PhonebookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PhonebookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PhonebookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "phonebook-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".phonebook"))
}
