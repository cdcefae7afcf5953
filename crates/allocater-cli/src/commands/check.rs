//! Check command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use allocater_core::{AllocationSet, Diagnostics, Warning, UNDEFINED_CLASS};
use allocater_ext_file::load_allocations_with_diagnostics;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{
    format_percent, print_header, print_json, print_rows, print_success, print_warnings,
};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Allocation CSV file (name, class, ratio)
    #[arg(short = 'l', long)]
    pub allocations: PathBuf,
}

/// One validated ratio.
#[derive(Debug, Clone, Serialize, Tabled)]
struct RatioRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Ratio")]
    ratio: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    allocations: &'a AllocationSet,
    warnings: &'a [Warning],
}

fn ratio_rows(
    allocations: &AllocationSet,
    completed: &BTreeSet<&str>,
    precision: usize,
) -> Vec<RatioRow> {
    allocations
        .iter()
        .flat_map(|allocation| {
            allocation.ratios().iter().map(move |(class, &ratio)| {
                let auto = class == UNDEFINED_CLASS && completed.contains(allocation.name());
                RatioRow {
                    name: allocation.name().to_string(),
                    class: class.clone(),
                    ratio: format_percent(ratio * 100.0, precision),
                    note: if auto {
                        "auto-completed".into()
                    } else {
                        String::new()
                    },
                }
            })
        })
        .collect()
}

/// Execute the check command.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let mut diagnostics = Diagnostics::new();
    let allocations = load_allocations_with_diagnostics(&args.allocations, &mut diagnostics)
        .with_context(|| format!("checking {}", args.allocations.display()))?;

    match ctx.format {
        OutputFormat::Json => print_json(&CheckReport {
            allocations: &allocations,
            warnings: diagnostics.warnings(),
        })?,
        OutputFormat::Table | OutputFormat::Csv => {
            let completed: BTreeSet<&str> = diagnostics
                .iter()
                .filter(|w| matches!(w, Warning::UndefinedClassAdded { .. }))
                .map(Warning::name)
                .collect();
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Allocations");
            }
            print_rows(&ratio_rows(&allocations, &completed, ctx.precision), ctx.format)?;
        }
    }

    if !ctx.quiet {
        print_warnings(diagnostics.warnings());
        print_success(&format!(
            "{} allocations valid ({} auto-completed)",
            allocations.len(),
            diagnostics.len()
        ));
    }

    Ok(())
}
