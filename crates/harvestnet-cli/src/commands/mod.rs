// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches here; each handler loads its inputs,
// runs the library, and emits JSON through `crate::output`.

pub mod inventory;
pub mod report;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};
use harvestnet_lib::SupplyChainConfig;

/// Load the configuration file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<SupplyChainConfig> {
    match path {
        Some(path) => SupplyChainConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(SupplyChainConfig::default()),
    }
}
