//! Threshold-driven supply chain advisories.
//!
//! Rules are evaluated in a fixed order: delivery reliability, then one line
//! per over-stocked warehouse in warehouse order, then capacity utilisation.
//! A rule whose input metric is an error marker does not fire.

use tracing::debug;

use crate::clustering::NetworkAnalysis;
use crate::config::RecommendationThresholds;
use crate::inventory::InventoryOptimization;
use crate::outcome::ItemResult;

/// Advisories emitted when delivery reliability falls below threshold.
pub const RELIABILITY_RECOMMENDATIONS: [&str; 3] = [
    "Optimize delivery routes to improve the on-time delivery rate",
    "Consider adding logistics nodes to shorten delivery distances",
    "Strengthen the logistics tracking system",
];

/// Advisories emitted when capacity utilisation falls below threshold.
pub const CAPACITY_RECOMMENDATIONS: [&str; 3] = [
    "Consolidate logistics resources to raise capacity utilization",
    "Rework the warehouse layout to reduce transport costs",
    "Consider introducing an intelligent dispatch system",
];

/// Advisory for a warehouse whose safety stock dominates its maximum level.
pub fn safety_stock_recommendation(warehouse: &str) -> String {
    format!("Warehouse {warehouse} safety stock is too high; optimize the replenishment strategy")
}

/// Derive the ordered recommendation list from the report sections.
///
/// `network` is `None` when the distribution analysis itself failed.
pub fn generate_recommendations(
    inventory: &InventoryOptimization,
    network: Option<&NetworkAnalysis>,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let efficiency = network.map(|analysis| &analysis.network_efficiency);

    if let Some(efficiency) = efficiency {
        if efficiency.delivery_reliability < thresholds.min_delivery_reliability {
            recommendations.extend(RELIABILITY_RECOMMENDATIONS.iter().map(|s| s.to_string()));
        }
    }

    for (warehouse, policy) in &inventory.optimal_inventory {
        let ItemResult::Ok(policy) = policy else {
            continue;
        };
        if policy.safety_stock > policy.max_inventory * thresholds.max_safety_stock_ratio {
            recommendations.push(safety_stock_recommendation(warehouse));
        }
    }

    if let Some(ItemResult::Ok(utilization)) = efficiency.map(|e| &e.capacity_utilization) {
        if *utilization < thresholds.min_capacity_utilization {
            recommendations.extend(CAPACITY_RECOMMENDATIONS.iter().map(|s| s.to_string()));
        }
    }

    debug!(count = recommendations.len(), "generated recommendations");
    recommendations
}
