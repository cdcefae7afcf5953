//! Merge command implementation.
//!
//! Merging is value-only: principals and dates of the inputs are dropped.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use allocater_core::exposures;
use allocater_ext_file::{load_assets, write_assets};

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{
    exposure_rows, exposure_totals, print_assets_csv, print_header, print_json, print_rows,
    print_success,
};

/// Arguments for the merge command.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// First asset CSV file
    pub first: PathBuf,

    /// Second asset CSV file
    pub second: PathBuf,

    /// Write the merged assets to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the merge command.
pub fn execute(args: MergeArgs, ctx: &Context) -> Result<()> {
    let first = load_assets(&args.first, None)
        .with_context(|| format!("loading assets from {}", args.first.display()))?;
    let second = load_assets(&args.second, None)
        .with_context(|| format!("loading assets from {}", args.second.display()))?;

    let merged = first.merge(&second);
    tracing::info!(
        first = first.len(),
        second = second.len(),
        merged = merged.len(),
        "merged asset files"
    );

    match ctx.format {
        OutputFormat::Table => {
            let summary = exposures(&merged);
            if !ctx.quiet {
                print_header("Merged Assets");
            }
            print_rows(&exposure_rows(&summary, ctx.sort, ctx.precision), ctx.format)?;
            if !ctx.quiet {
                print_rows(&exposure_totals(&summary, ctx.precision), ctx.format)?;
            }
        }
        OutputFormat::Json => print_json(&merged)?,
        OutputFormat::Csv => print_assets_csv(&merged)?,
    }

    if let Some(output) = &args.output {
        write_assets(output, &merged)
            .with_context(|| format!("writing merged assets to {}", output.display()))?;
        if !ctx.quiet {
            print_success(&format!("Wrote {} assets to {}", merged.len(), output.display()));
        }
    }

    Ok(())
}
