//! CSV file I/O with atomic writes
//!
//! Tables are read by header name, so column order in an existing file does
//! not matter, and written in a fixed column order. Writes go to a temp file
//! that is renamed over the target, so the file is either the old or the new
//! version, never a truncated mix.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::StringRecord;

use crate::error::PhonebookError;

/// A CSV file loaded into memory
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Resolve column positions for the given header names
    ///
    /// Fails if any column is missing from the header row.
    pub fn columns<const N: usize>(
        &self,
        names: [&'static str; N],
    ) -> Result<ColumnIndex<N>, PhonebookError> {
        let mut positions = [0usize; N];
        for (slot, name) in positions.iter_mut().zip(names) {
            *slot = self
                .headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    PhonebookError::Storage(format!("Missing column '{}' in header row", name))
                })?;
        }
        Ok(ColumnIndex { names, positions })
    }

    /// Data rows, excluding the header
    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Column positions resolved against a header row
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex<const N: usize> {
    names: [&'static str; N],
    positions: [usize; N],
}

impl<const N: usize> ColumnIndex<N> {
    /// Read the i-th requested column from a record
    ///
    /// `row` is the 1-based data row number, used in the error message.
    pub fn field<'r>(
        &self,
        record: &'r StringRecord,
        i: usize,
        row: usize,
    ) -> Result<&'r str, PhonebookError> {
        self.positions
            .get(i)
            .and_then(|&pos| record.get(pos))
            .ok_or_else(|| {
                PhonebookError::Storage(format!(
                    "Row {} is missing column '{}'",
                    row,
                    self.names.get(i).copied().unwrap_or("?")
                ))
            })
    }
}

/// Read a CSV file with a header row, returning `None` if the file doesn't exist
///
/// Rows with a different number of fields than the header are an error.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Option<CsvTable>, PhonebookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PhonebookError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| PhonebookError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?
        .clone();

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PhonebookError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(CsvTable { headers, records }))
}

/// Write a CSV file atomically (write to temp, then rename)
pub fn write_csv_atomic<P, I, R>(path: P, headers: &[&str], rows: I) -> Result<(), PhonebookError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PhonebookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PhonebookError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer
        .write_record(headers)
        .map_err(|e| PhonebookError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| PhonebookError::Storage(format!("Failed to write row: {}", e)))?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| PhonebookError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .flush()
        .map_err(|e| PhonebookError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| PhonebookError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PhonebookError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
