//! Contact repository for CSV storage
//!
//! Manages loading and saving contacts to contacts.csv. The mapping between
//! contact fields and columns is spelled out here: the file always has the
//! header `name,phone,country,email,category` in that order.

use std::path::{Path, PathBuf};

use crate::error::PhonebookError;
use crate::models::{Contact, CreateContactInput};

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of contacts.csv
pub const CONTACT_COLUMNS: [&str; 5] = ["name", "phone", "country", "email", "category"];

/// Repository for contact persistence
#[derive(Debug, Clone)]
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all contacts in file order
    ///
    /// A missing file is an empty phonebook. A row that is missing a column is
    /// an error; a blank name is kept as stored.
    pub fn load(&self) -> Result<Vec<Contact>, PhonebookError> {
        let table = match read_csv(&self.path)? {
            Some(table) if !table.is_empty() => table,
            _ => return Ok(Vec::new()),
        };

        let cols = table.columns(CONTACT_COLUMNS)?;

        table
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| -> Result<Contact, PhonebookError> {
                let row = i + 1;
                let input = CreateContactInput {
                    name: cols.field(record, 0, row)?.to_string(),
                    phone: cols.field(record, 1, row)?.to_string(),
                    country: Some(cols.field(record, 2, row)?.to_string()),
                    email: cols.field(record, 3, row)?.to_string(),
                    category: Some(cols.field(record, 4, row)?.to_string()),
                };

                Ok(Contact::from_stored(input))
            })
            .collect()
    }

    /// Overwrite the file with the given contacts
    pub fn save(&self, contacts: &[Contact]) -> Result<(), PhonebookError> {
        write_csv_atomic(&self.path, &CONTACT_COLUMNS, contacts.iter().map(contact_row))
    }
}

fn contact_row(contact: &Contact) -> [&str; 5] {
    [
        contact.name(),
        contact.phone(),
        contact.country(),
        contact.email(),
        contact.category().as_str(),
    ]
}
