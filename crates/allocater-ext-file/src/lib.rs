//! # Allocater Ext File
//!
//! CSV input and output for the Allocater core.
//!
//! This crate provides:
//! - CSV-based asset loading (`name`, `value`, optional `principal`)
//! - CSV-based allocation loading (`name`, `class`, `ratio`)
//! - CSV asset writing (`name,principal,value`)
//!
//! Columns are matched by header name, so column order is free. Cells are
//! trimmed. Grouping of allocation rows into per-asset allocations is left
//! to [`allocater_core::AllocationSet`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod allocations;
mod assets;
mod error;

pub use allocations::*;
pub use assets::*;
pub use error::{FileError, FileResult};

use std::io::Read;

/// Builds a header-aware, trimming CSV reader.
fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Returns the 1-based line number of a record, or 0 if unknown.
fn row_line(row: &csv::StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}

/// Parses a numeric cell.
fn parse_number(source: &str, line: u64, column: &str, raw: &str) -> FileResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| FileError::parse(source, line, column, raw))
}
