//! Output formatting utilities.

use std::io::Write;

use allocater_core::{ClassExposure, ExposureSummary, Warning};
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::{OutputFormat, SortOrder};

/// Formats and prints rows based on the specified format.
pub fn print_rows<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(&data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats an amount with a fixed number of decimals.
pub fn format_amount(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Formats a percentage (already scaled to 0-100).
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{value:.precision$}%")
}

/// Formats an optional amount; blank when absent.
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format_amount(v, precision))
        .unwrap_or_default()
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints collected diagnostics.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        print_warning(&warning.to_string());
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One exposure table row, formatted for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ExposureRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Principal")]
    pub principal: String,
    #[tabled(rename = "Gain")]
    pub gain: String,
    #[tabled(rename = "Weight")]
    pub weight: String,
}

impl ExposureRow {
    fn from_exposure(exposure: &ClassExposure, precision: usize) -> Self {
        Self {
            name: exposure.class.clone(),
            value: format_amount(exposure.value, precision),
            principal: format_optional(exposure.principal, precision),
            gain: format_optional(exposure.gain, precision),
            weight: format_percent(exposure.weight_pct, precision),
        }
    }
}

/// Orders and formats the rows of an exposure summary.
pub fn exposure_rows(
    summary: &ExposureSummary,
    sort: SortOrder,
    precision: usize,
) -> Vec<ExposureRow> {
    let ordered = match sort {
        SortOrder::Value => summary.sorted_by_value(),
        SortOrder::Class => summary.sorted_by_class(),
    };
    ordered
        .into_iter()
        .map(|e| ExposureRow::from_exposure(e, precision))
        .collect()
}

/// Totals block printed under an exposure table.
pub fn exposure_totals(summary: &ExposureSummary, precision: usize) -> Vec<KeyValue> {
    let mut totals = vec![
        KeyValue::new("Items", summary.class_count().to_string()),
        KeyValue::new("Total Value", format_amount(summary.total_value, precision)),
    ];
    if let Some(principal) = summary.total_principal {
        totals.push(KeyValue::new(
            "Total Principal",
            format_amount(principal, precision),
        ));
    }
    if let Some(gain) = summary.total_gain() {
        totals.push(KeyValue::new("Total Gain", format_amount(gain, precision)));
    }
    totals
}

/// Writes an asset set in the asset CSV layout to stdout.
pub fn print_assets_csv(assets: &allocater_core::AssetSet) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    allocater_ext_file::write_assets_to(&mut lock, assets, "stdout")?;
    lock.flush()?;
    Ok(())
}
