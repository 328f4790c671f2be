//! `routes` subcommand: shortest routes and topology only.

use std::path::Path;

use anyhow::{Context, Result};
use harvestnet_lib::{
    build_graph, optimize_logistics, LogisticsOptimization, LogisticsRecord, TransportLane,
};

use super::report::load_logistics;
use crate::output::{emit_json, JsonStyle};

pub fn handle_routes(logistics: &Path, style: JsonStyle, output: Option<&Path>) -> Result<()> {
    let optimization = compute_routes(logistics)?;
    emit_json(&optimization, style, output)
}

pub fn compute_routes(logistics: &Path) -> Result<LogisticsOptimization> {
    let records = load_logistics(logistics)?;
    let lanes: Vec<TransportLane> = records.iter().map(LogisticsRecord::lane).collect();
    let graph = build_graph(&lanes).context("failed to build the transport network")?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built transport network"
    );
    Ok(optimize_logistics(&graph))
}
