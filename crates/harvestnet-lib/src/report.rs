//! Supply chain report orchestration.
//!
//! A report run builds the transport graph from the logistics lanes, routes
//! over it, derives inventory policies, clusters the facilities seen in the
//! same logistics records, and finally evaluates the recommendation rules.
//! Nothing is cached between runs.

use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

use crate::clustering::{analyze_distribution_network, NetworkAnalysis};
use crate::config::SupplyChainConfig;
use crate::error::Result;
use crate::graph::build_graph;
use crate::inventory::{optimize_inventory, InventoryOptimization};
use crate::outcome::ItemResult;
use crate::recommendations::generate_recommendations;
use crate::records::{InventoryRecord, LogisticsRecord, TransportLane};
use crate::routing::{optimize_logistics, LogisticsOptimization};

/// Timestamp layout used in generated reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Complete supply chain report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyChainReport {
    pub timestamp: String,
    pub logistics_optimization: LogisticsOptimization,
    pub inventory_optimization: InventoryOptimization,
    /// Error marker when the facility set could not be clustered.
    pub network_analysis: ItemResult<NetworkAnalysis>,
    pub recommendations: Vec<String>,
}

/// Generate a report stamped with the current local time.
pub fn generate_report(
    logistics: &[LogisticsRecord],
    inventory: &[InventoryRecord],
    config: &SupplyChainConfig,
) -> Result<SupplyChainReport> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    generate_report_at(timestamp, logistics, inventory, config)
}

/// Generate a report with an explicit timestamp; every other field is a pure
/// function of the inputs.
pub fn generate_report_at(
    timestamp: impl Into<String>,
    logistics: &[LogisticsRecord],
    inventory: &[InventoryRecord],
    config: &SupplyChainConfig,
) -> Result<SupplyChainReport> {
    config.validate()?;

    let lanes: Vec<TransportLane> = logistics.iter().map(LogisticsRecord::lane).collect();
    let graph = build_graph(&lanes)?;
    let logistics_optimization = optimize_logistics(&graph);

    let inventory_optimization = optimize_inventory(inventory, &config.inventory);

    let facilities: Vec<_> = logistics.iter().map(LogisticsRecord::facility).collect();
    let network_analysis =
        ItemResult::from(analyze_distribution_network(&facilities, &config.clustering));
    if let Some(error) = network_analysis.error() {
        warn!(error, "distribution network analysis failed");
    }

    let recommendations = generate_recommendations(
        &inventory_optimization,
        network_analysis.value(),
        &config.thresholds,
    );

    info!(
        routes = logistics_optimization.optimal_routes.len(),
        warehouses = inventory_optimization.warehouse_stats.len(),
        recommendations = recommendations.len(),
        "generated supply chain report"
    );

    Ok(SupplyChainReport {
        timestamp: timestamp.into(),
        logistics_optimization,
        inventory_optimization,
        network_analysis,
        recommendations,
    })
}
