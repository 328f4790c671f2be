//! CSV ingestion for logistics and inventory records.
//!
//! Headers are validated up front so a missing column is reported once with
//! the full list of absent names, instead of failing on the first row.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::{InventoryRecord, LogisticsRecord};

/// Load logistics records from a CSV file.
pub fn load_logistics_records(path: &Path) -> Result<Vec<LogisticsRecord>> {
    let file = open_input(path)?;
    let records = read_records(file, &path.display().to_string(), LogisticsRecord::COLUMNS)?;
    info!(path = %path.display(), rows = records.len(), "loaded logistics records");
    Ok(records)
}

/// Load inventory records from a CSV file.
pub fn load_inventory_records(path: &Path) -> Result<Vec<InventoryRecord>> {
    let file = open_input(path)?;
    let records = read_records(file, &path.display().to_string(), InventoryRecord::COLUMNS)?;
    info!(path = %path.display(), rows = records.len(), "loaded inventory records");
    Ok(records)
}

/// Parse logistics records from any reader (file or in-memory buffer).
pub fn read_logistics_records<R: Read>(reader: R) -> Result<Vec<LogisticsRecord>> {
    read_records(reader, "logistics data", LogisticsRecord::COLUMNS)
}

/// Parse inventory records from any reader (file or in-memory buffer).
pub fn read_inventory_records<R: Read>(reader: R) -> Result<Vec<InventoryRecord>> {
    read_records(reader, "inventory data", InventoryRecord::COLUMNS)
}

fn open_input(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::File::open(path)?)
}

fn read_records<R, T>(reader: R, source_name: &str, required: &[&str]) -> Result<Vec<T>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::InvalidRecord {
            source_name: source_name.to_string(),
            line: 1,
            message: format!("failed to read headers: {err}"),
        })?
        .clone();
    check_columns(&headers, source_name, required)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<T>() {
        let record = row.map_err(|err| Error::InvalidRecord {
            source_name: source_name.to_string(),
            line: err.position().map(|pos| pos.line()).unwrap_or(0),
            message: err.to_string(),
        })?;
        records.push(record);
    }

    debug!(source = source_name, rows = records.len(), "parsed csv records");
    Ok(records)
}

fn check_columns(headers: &StringRecord, source_name: &str, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns {
            source_name: source_name.to_string(),
            missing,
        })
    }
}
