// Record store
// Two append-only CSV tables with fixed headers, read in full on every query

mod schema;

pub use schema::Table;

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::config::constants::{DEVELOPER_TABLE_FILE, PROJECT_TABLE_FILE};

/// One row keyed by column name. Columns missing from a short row are absent.
pub type Record = HashMap<String, String>;

pub struct WorkItemStore {
    data_dir: PathBuf,
}

impl WorkItemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn table_path(&self, table: Table) -> PathBuf {
        match table {
            Table::Projects => self.data_dir.join(PROJECT_TABLE_FILE),
            Table::Developers => self.data_dir.join(DEVELOPER_TABLE_FILE),
        }
    }

    /// Create the data directory and any missing table with its header row.
    ///
    /// Existing files are never touched, so this is safe to call before every read.
    pub fn ensure_schema(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory: {}", self.data_dir.display())
        })?;

        for table in Table::ALL {
            let path = self.table_path(table);
            if path.exists() {
                continue;
            }

            let mut writer = csv::Writer::from_path(&path)
                .with_context(|| format!("Failed to create table: {}", path.display()))?;
            writer
                .write_record(table.header())
                .with_context(|| format!("Failed to write header: {}", path.display()))?;
            writer.flush()?;

            tracing::info!(table = %table, path = %path.display(), "Created empty table");
        }

        Ok(())
    }

    /// Read every row of a table, keyed by the file's own header.
    ///
    /// A missing file yields an empty list.
    pub fn read_all(&self, table: Table) -> Result<Vec<Record>> {
        let path = self.table_path(table);
        if !path.exists() {
            tracing::debug!(table = %table, "Table file absent, treating as empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Failed to open table: {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header: {}", path.display()))?
            .clone();

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = row.with_context(|| {
                format!("Failed to parse row {} of {}", line + 1, path.display())
            })?;

            let record: Record = headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            records.push(record);
        }

        tracing::debug!(table = %table, rows = records.len(), "Read table");
        Ok(records)
    }

    /// Append one row in header order. Columns absent from `record` are written empty.
    pub fn append(&self, table: Table, record: &Record) -> Result<()> {
        let unknown: Vec<&str> = record
            .keys()
            .map(String::as_str)
            .filter(|key| !table.header().contains(key))
            .collect();
        if !unknown.is_empty() {
            bail!("Unknown column(s) for {} table: {}", table, unknown.join(", "));
        }

        self.ensure_schema()?;

        let path = self.table_path(table);
        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open table for append: {}", path.display()))?;

        let row: Vec<&str> = table
            .header()
            .iter()
            .map(|column| record.get(*column).map(String::as_str).unwrap_or(""))
            .collect();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to append row: {}", path.display()))?;
        writer.flush()?;

        Ok(())
    }
}
