//! Per-warehouse inventory policy derivation.
//!
//! Demand and lead-time statistics are aggregated per warehouse and turned
//! into a safety stock, economic order quantity, reorder point and maximum
//! inventory level. A warehouse whose formulas are undefined (for example a
//! zero holding cost) gets an error marker while the others still report.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::InventoryConfig;
use crate::error::{Error, Result};
use crate::outcome::ItemResult;
use crate::records::InventoryRecord;

/// Aggregated observations for one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseStats {
    pub observations: usize,
    pub inventory_level_mean: f64,
    /// Sample standard deviation; `None` with fewer than two observations.
    pub inventory_level_std: Option<f64>,
    pub inventory_level_min: f64,
    pub inventory_level_max: f64,
    pub demand_mean: f64,
    pub demand_std: Option<f64>,
    pub lead_time_mean: f64,
    pub storage_cost_mean: f64,
}

/// Replenishment policy for one warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventoryPolicy {
    pub safety_stock: f64,
    pub eoq: f64,
    pub reorder_point: f64,
    pub max_inventory: f64,
}

/// Inventory section of the supply chain report.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct InventoryOptimization {
    pub warehouse_stats: BTreeMap<String, WarehouseStats>,
    pub optimal_inventory: BTreeMap<String, ItemResult<InventoryPolicy>>,
}

/// Aggregate records per warehouse, keyed in warehouse-name order.
pub fn summarize_warehouses(records: &[InventoryRecord]) -> BTreeMap<String, WarehouseStats> {
    let mut grouped: BTreeMap<&str, Vec<&InventoryRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.warehouse.as_str())
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .map(|(warehouse, rows)| {
            let levels: Vec<f64> = rows.iter().map(|row| row.inventory_level).collect();
            let demand: Vec<f64> = rows.iter().map(|row| row.demand).collect();
            let lead_times: Vec<f64> = rows.iter().map(|row| row.lead_time).collect();
            let storage: Vec<f64> = rows.iter().map(|row| row.storage_cost).collect();

            let stats = WarehouseStats {
                observations: rows.len(),
                inventory_level_mean: mean(&levels),
                inventory_level_std: sample_std(&levels),
                inventory_level_min: levels.iter().copied().fold(f64::INFINITY, f64::min),
                inventory_level_max: levels.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                demand_mean: mean(&demand),
                demand_std: sample_std(&demand),
                lead_time_mean: mean(&lead_times),
                storage_cost_mean: mean(&storage),
            };
            (warehouse.to_string(), stats)
        })
        .collect()
}

/// Safety stock at the configured service level:
/// `z · sqrt(L · σd² + μd² · L)`.
///
/// Returns `None` when the radicand is negative or not finite.
pub fn safety_stock(
    z_score: f64,
    demand_mean: f64,
    demand_std: f64,
    lead_time_mean: f64,
) -> Option<f64> {
    let radicand = lead_time_mean * demand_std.powi(2) + demand_mean.powi(2) * lead_time_mean;
    if !radicand.is_finite() || radicand < 0.0 {
        return None;
    }
    Some(z_score * radicand.sqrt())
}

/// Economic order quantity `sqrt(2 · D · S / H)`.
///
/// Returns `None` for a zero holding cost or a negative radicand.
pub fn economic_order_quantity(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> Option<f64> {
    if holding_cost == 0.0 {
        return None;
    }
    let radicand = 2.0 * annual_demand * order_cost / holding_cost;
    if !radicand.is_finite() || radicand < 0.0 {
        return None;
    }
    Some(radicand.sqrt())
}

/// Derive the replenishment policy for one warehouse.
pub fn inventory_policy(
    warehouse: &str,
    stats: &WarehouseStats,
    config: &InventoryConfig,
) -> Result<InventoryPolicy> {
    let undefined = |reason: &str| Error::UndefinedPolicy {
        warehouse: warehouse.to_string(),
        reason: reason.to_string(),
    };

    let demand_std = stats.demand_std.unwrap_or(0.0);
    let safety_stock = safety_stock(
        config.z_score,
        stats.demand_mean,
        demand_std,
        stats.lead_time_mean,
    )
    .ok_or_else(|| undefined("lead-time demand variance is negative"))?;

    let annual_demand = stats.demand_mean * config.days_per_year;
    let holding_cost = stats.storage_cost_mean / config.days_per_year;
    if holding_cost == 0.0 {
        return Err(undefined("holding cost is zero"));
    }
    let eoq = economic_order_quantity(annual_demand, config.order_cost, holding_cost)
        .ok_or_else(|| undefined("order quantity radicand is negative"))?;

    Ok(InventoryPolicy {
        safety_stock,
        eoq,
        reorder_point: safety_stock + stats.demand_mean * stats.lead_time_mean,
        max_inventory: safety_stock + eoq,
    })
}

/// Compute warehouse statistics and policies for every warehouse.
pub fn optimize_inventory(
    records: &[InventoryRecord],
    config: &InventoryConfig,
) -> InventoryOptimization {
    let warehouse_stats = summarize_warehouses(records);
    let optimal_inventory = warehouse_stats
        .iter()
        .map(|(warehouse, stats)| {
            let policy = inventory_policy(warehouse, stats, config);
            match &policy {
                Ok(policy) => debug!(
                    warehouse = %warehouse,
                    safety_stock = policy.safety_stock,
                    eoq = policy.eoq,
                    "derived inventory policy"
                ),
                Err(err) => warn!(warehouse = %warehouse, error = %err, "inventory policy undefined"),
            }
            (warehouse.clone(), ItemResult::from(policy))
        })
        .collect::<BTreeMap<_, _>>();

    info!(
        warehouses = warehouse_stats.len(),
        failed = optimal_inventory.values().filter(|p| !p.is_ok()).count(),
        "optimised inventory"
    );

    InventoryOptimization {
        warehouse_stats,
        optimal_inventory,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_std_uses_bessel_correction() {
        let std = sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((std - 2.138_089_935).abs() < 1e-6);
        assert_eq!(sample_std(&[3.0]), None);
    }

    #[test]
    fn safety_stock_rejects_negative_lead_time() {
        assert_eq!(safety_stock(1.645, 10.0, 2.0, -1.0), None);
        assert_eq!(safety_stock(1.645, 0.0, 0.0, 0.0), Some(0.0));
    }

    #[test]
    fn eoq_undefined_for_zero_holding_cost() {
        assert_eq!(economic_order_quantity(3650.0, 100.0, 0.0), None);
    }
}
