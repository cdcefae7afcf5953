//! Allocation CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use allocater_core::{AllocationRecord, AllocationSet, Diagnostics};

use crate::error::{FileError, FileResult};
use crate::{csv_reader, parse_number, row_line};

// =============================================================================
// CSV ALLOCATION READER
// =============================================================================

/// CSV record for allocations.
#[derive(Debug, Deserialize)]
struct AllocationRow {
    name: String,
    class: String,
    ratio: String,
}

/// Reads flat (name, class, ratio) rows from CSV without grouping them.
pub fn read_allocation_records<R: Read>(
    reader: R,
    source: &str,
) -> FileResult<Vec<AllocationRecord>> {
    let mut reader = csv_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| FileError::csv(source, e))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| FileError::csv(source, e))?;
        let line = row_line(&row);
        let parsed: AllocationRow = row
            .deserialize(Some(&headers))
            .map_err(|e| FileError::csv(source, e))?;

        let ratio = parse_number(source, line, "ratio", &parsed.ratio)?;
        records.push(AllocationRecord::new(parsed.name, parsed.class, ratio));
    }

    Ok(records)
}

/// Reads and validates an allocation set from CSV, recording warnings into
/// `diagnostics`.
pub fn read_allocations<R: Read>(
    reader: R,
    source: &str,
    diagnostics: &mut Diagnostics,
) -> FileResult<AllocationSet> {
    let records = read_allocation_records(reader, source)?;
    tracing::debug!(source, rows = records.len(), "read allocation records");
    Ok(AllocationSet::from_records_with_diagnostics(
        records,
        diagnostics,
    )?)
}

/// Loads an allocation set from a CSV file.
///
/// Auto-completion warnings are logged only; use
/// [`load_allocations_with_diagnostics`] to collect them.
pub fn load_allocations(path: impl AsRef<Path>) -> FileResult<AllocationSet> {
    load_allocations_with_diagnostics(path, &mut Diagnostics::new())
}

/// Loads an allocation set from a CSV file, recording warnings into
/// `diagnostics`.
pub fn load_allocations_with_diagnostics(
    path: impl AsRef<Path>,
    diagnostics: &mut Diagnostics,
) -> FileResult<AllocationSet> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| FileError::io(label.as_str(), e))?;
    read_allocations(file, &label, diagnostics)
}
