//! Storage layer for the phonebook
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation, plus the audit log that records every change.

pub mod contacts;
pub mod credentials;
pub mod file_io;

pub use contacts::ContactRepository;
pub use credentials::CredentialRepository;
pub use file_io::{read_csv, write_csv_atomic, CsvTable};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PhonebookPaths;
use crate::config::settings::Settings;
use crate::error::PhonebookError;

/// Main storage coordinator that provides access to all repositories
#[derive(Debug, Clone)]
pub struct Storage {
    pub contacts: ContactRepository,
    pub credentials: CredentialRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, creating the data directories
    pub fn new(paths: PhonebookPaths, settings: &Settings) -> Result<Self, PhonebookError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            credentials: CredentialRepository::new(paths.credentials_file()),
            audit,
        })
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append an entry to the audit log (no-op when auditing is disabled)
    ///
    /// A failed write is reported on stderr; the change it describes has
    /// already been saved and stands.
    pub fn log(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                eprintln!("Warning: {}", e);
            }
        }
    }

    /// Log a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(&AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ));
    }

    /// Log an update operation, computing the diff from the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ));
    }

    /// Log a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(&AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ));
    }
}
