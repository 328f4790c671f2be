//! `report` subcommand: full supply chain report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use harvestnet_lib::{
    generate_report, load_inventory_records, load_logistics_records, prioritize,
    SupplyChainConfig, SupplyChainReport,
};

use crate::output::{emit_json, JsonStyle};

/// Arguments for a report run.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub logistics: PathBuf,
    pub inventory: PathBuf,
    pub output: Option<PathBuf>,
    pub compact: bool,
    /// Replace the recommendation list with its priority-triaged form.
    pub triage: bool,
}

pub fn handle_report(args: &ReportArgs, config: &SupplyChainConfig) -> Result<()> {
    let report = build_report(args, config)?;
    emit_json(
        &report,
        JsonStyle::from_compact_flag(args.compact),
        args.output.as_deref(),
    )
}

/// Load both datasets and generate the report without emitting it.
pub fn build_report(args: &ReportArgs, config: &SupplyChainConfig) -> Result<SupplyChainReport> {
    let logistics = load_logistics(&args.logistics)?;
    let inventory = load_inventory_records(&args.inventory).with_context(|| {
        format!(
            "failed to load inventory records from {}",
            args.inventory.display()
        )
    })?;

    let mut report =
        generate_report(&logistics, &inventory, config).context("failed to generate report")?;
    if args.triage {
        report.recommendations = prioritize(&report.recommendations, &config.triage);
    }
    Ok(report)
}

pub(crate) fn load_logistics(path: &Path) -> Result<Vec<harvestnet_lib::LogisticsRecord>> {
    load_logistics_records(path)
        .with_context(|| format!("failed to load logistics records from {}", path.display()))
}
