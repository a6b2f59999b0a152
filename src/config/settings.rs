//! User settings for the phonebook
//!
//! Manages password hashing cost and audit logging preferences.

use serde::{Deserialize, Serialize};

use super::paths::PhonebookPaths;
use crate::crypto::password::PasswordHashParams;
use crate::error::PhonebookError;

/// User settings for the phonebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Argon2 cost parameters used when registering a new account
    #[serde(default)]
    pub password_hashing: PasswordHashParams,

    /// Whether contact and login events are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            password_hashing: PasswordHashParams::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PhonebookPaths) -> Result<Self, PhonebookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PhonebookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PhonebookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PhonebookPaths) -> Result<(), PhonebookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PhonebookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PhonebookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
