//! Harvestnet library entry points.
//!
//! This crate turns logistics and inventory records into a supply chain
//! report: all-pairs transport routes and topology statistics, per-warehouse
//! inventory policies, density-based clustering of distribution facilities,
//! and threshold-driven recommendations. Higher-level consumers (the CLI,
//! report aggregators) should only depend on the functions exported here.
//!

#![deny(warnings)]

pub mod clustering;
pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod inventory;
pub mod outcome;
pub mod path;
pub mod recommendations;
pub mod records;
pub mod report;
pub mod routing;
pub mod triage;

pub use clustering::{
    analyze_distribution_network, dbscan, standardize, Cluster, CoverageAnalysis,
    NetworkAnalysis, NetworkEfficiency, RegionCoverage, NOISE_LABEL,
};
pub use config::{
    ClusteringConfig, InventoryConfig, RecommendationThresholds, SupplyChainConfig, TriageConfig,
};
pub use dataset::{
    load_inventory_records, load_logistics_records, read_inventory_records,
    read_logistics_records,
};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeAttributes, EdgeWeight, Graph, NetworkBuilder, NodeId};
pub use inventory::{
    economic_order_quantity, inventory_policy, optimize_inventory, safety_stock,
    summarize_warehouses, InventoryOptimization, InventoryPolicy, WarehouseStats,
};
pub use outcome::ItemResult;
pub use path::{dijkstra, trace_path, ShortestPaths};
pub use recommendations::{
    generate_recommendations, safety_stock_recommendation, CAPACITY_RECOMMENDATIONS,
    RELIABILITY_RECOMMENDATIONS,
};
pub use records::{FacilityLocation, InventoryRecord, LogisticsRecord, TransportLane};
pub use report::{generate_report, generate_report_at, SupplyChainReport, TIMESTAMP_FORMAT};
pub use routing::{
    optimize_logistics, optimize_routes, route_key, topology_stats, LogisticsOptimization, Route,
    TopologyStats,
};
pub use triage::{classify, prioritize, Priority};
