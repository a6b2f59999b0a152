//! Credential repository for CSV storage
//!
//! credentials.csv holds the header `username,password_hash` and one data
//! row. Only the first row is ever read.

use std::path::{Path, PathBuf};

use crate::error::PhonebookError;
use crate::models::Credential;

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of credentials.csv
pub const CREDENTIAL_COLUMNS: [&str; 2] = ["username", "password_hash"];

/// Repository for the single login credential
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    path: PathBuf,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the first stored credential, if any
    pub fn load(&self) -> Result<Option<Credential>, PhonebookError> {
        let table = match read_csv(&self.path)? {
            Some(table) => table,
            None => return Ok(None),
        };

        let Some(record) = table.records().first() else {
            return Ok(None);
        };

        let cols = table.columns(CREDENTIAL_COLUMNS)?;
        let username = cols.field(record, 0, 1)?;
        let password_hash = cols.field(record, 1, 1)?;

        Ok(Some(Credential::from_stored(username, password_hash)))
    }

    /// Overwrite the file with a single credential row
    pub fn save(&self, credential: &Credential) -> Result<(), PhonebookError> {
        write_csv_atomic(
            &self.path,
            &CREDENTIAL_COLUMNS,
            [[credential.username(), credential.password_hash()]],
        )
    }
}
