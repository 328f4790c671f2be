//! `inventory` subcommand: per-warehouse statistics and policies.

use std::path::Path;

use anyhow::{Context, Result};
use harvestnet_lib::{
    load_inventory_records, optimize_inventory, InventoryConfig, InventoryOptimization,
};

use crate::output::{emit_json, JsonStyle};

pub fn handle_inventory(
    inventory: &Path,
    config: &InventoryConfig,
    style: JsonStyle,
    output: Option<&Path>,
) -> Result<()> {
    let optimization = compute_inventory(inventory, config)?;
    emit_json(&optimization, style, output)
}

pub fn compute_inventory(inventory: &Path, config: &InventoryConfig) -> Result<InventoryOptimization> {
    let records = load_inventory_records(inventory).with_context(|| {
        format!(
            "failed to load inventory records from {}",
            inventory.display()
        )
    })?;
    Ok(optimize_inventory(&records, config))
}
