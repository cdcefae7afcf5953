//! Assets command implementation.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use allocater_core::{exposures, ExposureSummary};
use allocater_ext_file::load_assets;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{
    exposure_rows, exposure_totals, print_assets_csv, print_header, print_json, print_rows,
};

/// Arguments for the assets command.
#[derive(Args, Debug)]
pub struct AssetsArgs {
    /// Asset CSV file (name, value, optional principal)
    #[arg(short, long)]
    pub assets: PathBuf,
}

#[derive(Debug, Serialize)]
struct AssetsReport<'a> {
    count: usize,
    #[serde(flatten)]
    summary: &'a ExposureSummary,
}

/// Execute the assets command.
pub fn execute(args: AssetsArgs, ctx: &Context) -> Result<()> {
    let assets = load_assets(&args.assets, None)
        .with_context(|| format!("loading assets from {}", args.assets.display()))?;
    let summary = exposures(&assets);

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Assets ({})", args.assets.display()));
            }
            print_rows(&exposure_rows(&summary, ctx.sort, ctx.precision), ctx.format)?;
            if !ctx.quiet {
                print_rows(&exposure_totals(&summary, ctx.precision), ctx.format)?;
            }
        }
        OutputFormat::Json => print_json(&AssetsReport {
            count: assets.len(),
            summary: &summary,
        })?,
        OutputFormat::Csv => print_assets_csv(&assets)?,
    }

    Ok(())
}
