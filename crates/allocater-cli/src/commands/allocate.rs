//! Allocate command implementation.
//!
//! Loads an asset file and an allocation file, aggregates values by class
//! and prints the exposure summary.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use allocater_core::{
    aggregate_with_diagnostics, exposures, Diagnostics, ExposureSummary, Warning,
};
use allocater_ext_file::{load_allocations_with_diagnostics, load_assets, write_assets};

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{
    exposure_rows, exposure_totals, print_assets_csv, print_header, print_json, print_rows,
    print_success, print_warnings,
};

/// Arguments for the allocate command.
#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// Asset CSV file (name, value, optional principal)
    #[arg(short, long)]
    pub assets: PathBuf,

    /// Allocation CSV file (name, class, ratio)
    #[arg(short = 'l', long)]
    pub allocations: PathBuf,

    /// Date label for the asset snapshot
    #[arg(short, long)]
    pub date: Option<String>,

    /// Write the per-class result to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// JSON shape of the allocate report.
#[derive(Debug, Serialize)]
struct AllocateReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(flatten)]
    summary: &'a ExposureSummary,
    warnings: &'a [Warning],
}

/// Execute the allocate command.
pub fn execute(args: AllocateArgs, ctx: &Context) -> Result<()> {
    let assets = load_assets(&args.assets, args.date.clone())
        .with_context(|| format!("loading assets from {}", args.assets.display()))?;

    let mut diagnostics = Diagnostics::new();
    let allocations = load_allocations_with_diagnostics(&args.allocations, &mut diagnostics)
        .with_context(|| format!("loading allocations from {}", args.allocations.display()))?;

    let result = aggregate_with_diagnostics(&allocations, &assets, &mut diagnostics);
    let summary = exposures(&result);
    tracing::info!(
        assets = assets.len(),
        allocations = allocations.len(),
        classes = summary.class_count(),
        warnings = diagnostics.len(),
        "allocation complete"
    );

    match ctx.format {
        OutputFormat::Table => {
            let title = match assets.date() {
                Some(date) => format!("Exposure by Class ({date})"),
                None => "Exposure by Class".to_string(),
            };
            if !ctx.quiet {
                print_header(&title);
            }
            print_rows(&exposure_rows(&summary, ctx.sort, ctx.precision), ctx.format)?;
            if !ctx.quiet {
                print_rows(&exposure_totals(&summary, ctx.precision), ctx.format)?;
            }
        }
        OutputFormat::Json => {
            print_json(&AllocateReport {
                date: assets.date(),
                summary: &summary,
                warnings: diagnostics.warnings(),
            })?;
        }
        OutputFormat::Csv => print_assets_csv(&result)?,
    }

    if !ctx.quiet {
        print_warnings(diagnostics.warnings());
    }

    if let Some(output) = &args.output {
        write_assets(output, &result)
            .with_context(|| format!("writing result to {}", output.display()))?;
        if !ctx.quiet {
            print_success(&format!("Wrote {} classes to {}", result.len(), output.display()));
        }
    }

    Ok(())
}
