//! Density-based clustering of distribution facilities.
//!
//! Facility coordinates are standardised to zero mean and unit variance and
//! grouped with DBSCAN. Points are visited in input order and clusters are
//! numbered in discovery order, so labels are stable for a fixed input. Points
//! that are neither core points nor reachable from one are labelled
//! [`NOISE_LABEL`].
//!
//! Alongside the clusters this module derives service coverage and network
//! efficiency metrics over the same facility set. Ratio metrics whose
//! denominator is zero are reported as per-metric error markers.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ClusteringConfig;
use crate::error::{Error, Result};
use crate::outcome::ItemResult;
use crate::records::FacilityLocation;

/// Label assigned to points outside every dense region.
pub const NOISE_LABEL: i64 = -1;

/// Aggregates for one cluster label (noise included).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub label: i64,
    pub facility_count: usize,
    /// Summed demand of all member facilities.
    pub demand: f64,
    /// Mean transport cost of member facilities.
    pub transport_cost: f64,
    /// Mean service radius of member facilities.
    pub service_radius: f64,
}

/// Per-region population coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCoverage {
    pub population: f64,
    pub average_service_radius: f64,
    /// Service radius weighted by facility population.
    pub population_weighted_radius: ItemResult<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageAnalysis {
    pub total_coverage: f64,
    pub average_coverage: f64,
    pub coverage_by_region: BTreeMap<String, f64>,
    pub population_covered: BTreeMap<String, RegionCoverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkEfficiency {
    pub average_delivery_time: f64,
    /// Fraction of deliveries that arrived no later than promised.
    pub delivery_reliability: f64,
    pub cost_efficiency: ItemResult<f64>,
    pub capacity_utilization: ItemResult<f64>,
}

/// Distribution section of the supply chain report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkAnalysis {
    pub clusters: Vec<Cluster>,
    pub coverage_analysis: CoverageAnalysis,
    pub network_efficiency: NetworkEfficiency,
}

/// Cluster `facilities` and derive coverage and efficiency metrics.
pub fn analyze_distribution_network(
    facilities: &[FacilityLocation],
    config: &ClusteringConfig,
) -> Result<NetworkAnalysis> {
    if facilities.is_empty() {
        return Err(Error::EmptyFacilitySet);
    }
    config.validate()?;

    let points: Vec<[f64; 2]> = facilities
        .iter()
        .map(|facility| [facility.latitude, facility.longitude])
        .collect();
    let labels = dbscan(&standardize(&points), config);
    let clusters = summarize_clusters(facilities, &labels);

    info!(
        facilities = facilities.len(),
        clusters = clusters.iter().filter(|c| c.label != NOISE_LABEL).count(),
        noise = labels.iter().filter(|&&label| label == NOISE_LABEL).count(),
        "clustered distribution network"
    );

    Ok(NetworkAnalysis {
        clusters,
        coverage_analysis: analyze_coverage(facilities),
        network_efficiency: network_efficiency(facilities),
    })
}

/// Scale each coordinate column to zero mean and unit (population) variance.
/// A column with zero variance is only centred.
pub fn standardize(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len() as f64;
    let mut means = [0.0; 2];
    let mut scales = [1.0; 2];
    for axis in 0..2 {
        let mean = points.iter().map(|p| p[axis]).sum::<f64>() / n;
        let variance = points.iter().map(|p| (p[axis] - mean).powi(2)).sum::<f64>() / n;
        means[axis] = mean;
        if variance > 0.0 {
            scales[axis] = variance.sqrt();
        }
    }
    points
        .iter()
        .map(|p| {
            [
                (p[0] - means[0]) / scales[0],
                (p[1] - means[1]) / scales[1],
            ]
        })
        .collect()
}

/// Label points with DBSCAN.
///
/// A point is a core point when at least `min_samples` points (itself
/// included) lie within `eps`. Clusters grow from core points in input order;
/// border points join the first cluster that reaches them.
pub fn dbscan(points: &[[f64; 2]], config: &ClusteringConfig) -> Vec<i64> {
    let eps_squared = config.eps * config.eps;
    let neighbourhoods: Vec<Vec<usize>> = points
        .iter()
        .map(|p| {
            points
                .iter()
                .enumerate()
                .filter(|(_, q)| squared_distance(p, q) <= eps_squared)
                .map(|(index, _)| index)
                .collect()
        })
        .collect();
    let is_core: Vec<bool> = neighbourhoods
        .iter()
        .map(|members| members.len() >= config.min_samples)
        .collect();

    let mut labels = vec![NOISE_LABEL; points.len()];
    let mut next_label = 0i64;
    let mut stack = Vec::new();

    for seed in 0..points.len() {
        if labels[seed] != NOISE_LABEL || !is_core[seed] {
            continue;
        }
        stack.push(seed);
        while let Some(point) = stack.pop() {
            if labels[point] != NOISE_LABEL {
                continue;
            }
            labels[point] = next_label;
            if is_core[point] {
                stack.extend(
                    neighbourhoods[point]
                        .iter()
                        .copied()
                        .filter(|&neighbour| labels[neighbour] == NOISE_LABEL),
                );
            }
        }
        debug!(label = next_label, seed, "grew cluster");
        next_label += 1;
    }

    labels
}

fn squared_distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}

fn summarize_clusters(facilities: &[FacilityLocation], labels: &[i64]) -> Vec<Cluster> {
    let mut grouped: BTreeMap<i64, Vec<&FacilityLocation>> = BTreeMap::new();
    for (facility, &label) in facilities.iter().zip(labels) {
        grouped.entry(label).or_default().push(facility);
    }

    grouped
        .into_iter()
        .map(|(label, members)| {
            let count = members.len() as f64;
            Cluster {
                label,
                facility_count: members.len(),
                demand: members.iter().map(|f| f.demand).sum(),
                transport_cost: members.iter().map(|f| f.transport_cost).sum::<f64>() / count,
                service_radius: members.iter().map(|f| f.service_radius).sum::<f64>() / count,
            }
        })
        .collect()
}

fn analyze_coverage(facilities: &[FacilityLocation]) -> CoverageAnalysis {
    let total_coverage: f64 = facilities.iter().map(|f| f.service_radius).sum();

    let mut by_region: BTreeMap<&str, Vec<&FacilityLocation>> = BTreeMap::new();
    for facility in facilities {
        by_region
            .entry(facility.region.as_str())
            .or_default()
            .push(facility);
    }

    let mut coverage_by_region = BTreeMap::new();
    let mut population_covered = BTreeMap::new();
    for (region, members) in by_region {
        let average_service_radius =
            members.iter().map(|f| f.service_radius).sum::<f64>() / members.len() as f64;
        let population: f64 = members.iter().map(|f| f.population).sum();
        let weighted: f64 = members
            .iter()
            .map(|f| f.population * f.service_radius)
            .sum();
        let population_weighted_radius = ratio(
            weighted,
            population,
            "population_weighted_radius",
            "regional population is zero",
        );

        coverage_by_region.insert(region.to_string(), average_service_radius);
        population_covered.insert(
            region.to_string(),
            RegionCoverage {
                population,
                average_service_radius,
                population_weighted_radius,
            },
        );
    }

    CoverageAnalysis {
        total_coverage,
        average_coverage: total_coverage / facilities.len() as f64,
        coverage_by_region,
        population_covered,
    }
}

fn network_efficiency(facilities: &[FacilityLocation]) -> NetworkEfficiency {
    let n = facilities.len() as f64;
    let on_time = facilities
        .iter()
        .filter(|f| f.actual_delivery_time <= f.promised_delivery_time)
        .count();
    let transport_cost: f64 = facilities.iter().map(|f| f.transport_cost).sum();
    let margin: f64 = facilities
        .iter()
        .map(|f| f.revenue - f.transport_cost)
        .sum();
    let load: f64 = facilities.iter().map(|f| f.actual_load).sum();
    let capacity: f64 = facilities.iter().map(|f| f.transport_capacity).sum();

    NetworkEfficiency {
        average_delivery_time: facilities.iter().map(|f| f.delivery_time).sum::<f64>() / n,
        delivery_reliability: on_time as f64 / n,
        cost_efficiency: ratio(
            margin,
            transport_cost,
            "cost_efficiency",
            "total transport cost is zero",
        ),
        capacity_utilization: ratio(
            load,
            capacity,
            "capacity_utilization",
            "total transport capacity is zero",
        ),
    }
}

fn ratio(
    numerator: f64,
    denominator: f64,
    metric: &'static str,
    reason: &'static str,
) -> ItemResult<f64> {
    if denominator == 0.0 {
        return ItemResult::from(Err(Error::UndefinedMetric { metric, reason }));
    }
    ItemResult::Ok(numerator / denominator)
}
