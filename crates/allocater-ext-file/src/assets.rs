//! Asset CSV reading and writing.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;

use allocater_core::{AssetRecord, AssetSet};

use crate::error::{FileError, FileResult};
use crate::{csv_reader, parse_number, row_line};

// =============================================================================
// CSV ASSET READER
// =============================================================================

/// CSV record for assets.
#[derive(Debug, Deserialize)]
struct AssetRow {
    name: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    principal: Option<String>,
}

/// Reads asset records from CSV.
///
/// Columns are matched by header name (`name`, `value`, optional
/// `principal`). An empty value reads as 0.0; an empty or `None` principal
/// reads as "no principal". `source` labels errors.
pub fn read_asset_records<R: Read>(reader: R, source: &str) -> FileResult<Vec<AssetRecord>> {
    let mut reader = csv_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| FileError::csv(source, e))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| FileError::csv(source, e))?;
        let line = row_line(&row);
        let parsed: AssetRow = row
            .deserialize(Some(&headers))
            .map_err(|e| FileError::csv(source, e))?;

        let value = match parsed.value.as_deref() {
            None | Some("") => 0.0,
            Some(raw) => parse_number(source, line, "value", raw)?,
        };

        let principal = match parsed.principal.as_deref() {
            None | Some("") | Some("None") => None,
            Some(raw) => Some(parse_number(source, line, "principal", raw)?),
        };

        records.push(AssetRecord {
            name: parsed.name,
            value,
            principal,
        });
    }

    Ok(records)
}

/// Reads an asset set from CSV.
pub fn read_assets<R: Read>(reader: R, source: &str, date: Option<String>) -> FileResult<AssetSet> {
    let records = read_asset_records(reader, source)?;
    tracing::debug!(source, rows = records.len(), "read asset records");
    Ok(AssetSet::from_records(records, date))
}

/// Loads an asset set from a CSV file.
///
/// # Example
///
/// ```rust,no_run
/// let assets = allocater_ext_file::load_assets("assets.csv", Some("2025-01-31".into()))?;
/// println!("{assets}");
/// # Ok::<(), allocater_ext_file::FileError>(())
/// ```
pub fn load_assets(path: impl AsRef<Path>, date: Option<String>) -> FileResult<AssetSet> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| FileError::io(label.as_str(), e))?;
    read_assets(file, &label, date)
}

// =============================================================================
// CSV ASSET WRITER
// =============================================================================

/// Writes an asset set as `name,principal,value` CSV.
///
/// Principal cells are blank when principals are not tracked or the name
/// has none.
pub fn write_assets_to<W: Write>(writer: W, assets: &AssetSet, source: &str) -> FileResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(["name", "principal", "value"])
        .map_err(|e| FileError::csv(source, e))?;

    for (name, value) in assets.values() {
        let principal = assets
            .principal(name)
            .map(|p| p.to_string())
            .unwrap_or_default();
        writer
            .write_record([name.as_str(), principal.as_str(), value.to_string().as_str()])
            .map_err(|e| FileError::csv(source, e))?;
    }

    writer.flush().map_err(|e| FileError::io(source, e))
}

/// Writes an asset set to a CSV file, replacing any existing file.
pub fn write_assets(path: impl AsRef<Path>, assets: &AssetSet) -> FileResult<()> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::create(path).map_err(|e| FileError::io(label.as_str(), e))?;
    write_assets_to(file, assets, &label)?;
    tracing::debug!(path = %label, rows = assets.len(), "wrote assets");
    Ok(())
}
